use sea_orm_migration::{prelude::*, schema::*};

static IDX_USERS_EMAIL: &str = "idx_users_email";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Name))
                    .col(string(Users::Email))
                    .col(string(Users::Password))
                    .col(timestamp(Users::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Login looks users up by email and registration relies on this
        // constraint to reject duplicates.
        manager
            .create_index(
                Index::create()
                    .name(IDX_USERS_EMAIL)
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USERS_EMAIL)
                    .table(Users::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    Email,
    Password,
    CreatedAt,
}
