use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommandUsage::Table)
                    .if_not_exists()
                    .col(pk_auto(CommandUsage::Id))
                    .col(string_uniq(CommandUsage::Command))
                    .col(big_integer(CommandUsage::Count).default(0))
                    .col(
                        timestamp(CommandUsage::LastUsedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommandUsage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommandUsage {
    Table,
    Id,
    Command,
    Count,
    LastUsedAt,
}
