use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Deals::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Deals::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Deals::Title).string().not_null())
                    .col(ColumnDef::new(Deals::Description).text().not_null())
                    .col(ColumnDef::new(Deals::PartnerName).string().not_null())
                    .col(ColumnDef::new(Deals::LogoUrl).string())
                    .col(ColumnDef::new(Deals::Conditions).text())
                    .col(
                        ColumnDef::new(Deals::IsLocked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Deals::Category).string().not_null())
                    .col(ColumnDef::new(Deals::PartnerLink).string())
                    .col(ColumnDef::new(Deals::DiscountValue).string())
                    .col(
                        ColumnDef::new(Deals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Deals::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Deals::Table)
                    .col(Deals::Category)
                    .name("idx_deals_category")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Deals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Deals {
    Table,
    Id,
    Title,
    Description,
    PartnerName,
    LogoUrl,
    Conditions,
    IsLocked,
    Category,
    PartnerLink,
    DiscountValue,
    CreatedAt,
    UpdatedAt,
}
