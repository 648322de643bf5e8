use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Claims::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Claims::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Claims::UserId).uuid().not_null())
                    .col(ColumnDef::new(Claims::DealId).uuid().not_null())
                    .col(
                        ColumnDef::new(Claims::Status)
                            .string()
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Claims::ClaimCode).string().not_null())
                    .col(ColumnDef::new(Claims::LockScope).uuid())
                    .col(
                        ColumnDef::new(Claims::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Claims::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .check(Expr::col(Claims::Status).is_in(["pending", "approved", "rejected"]))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Claims::Table, Claims::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Claims::Table, Claims::DealId)
                            .to(Deals::Table, Deals::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Claims::Table)
                    .col(Claims::UserId)
                    .name("idx_claims_user_id")
                    .to_owned(),
            )
            .await?;

        manager.create_index(lock_scope_index()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Claims::Table).to_owned())
            .await
    }
}

/// One locked claim per user and deal. NULL `lock_scope` rows (unlocked
/// deals) never collide.
fn lock_scope_index() -> IndexCreateStatement {
    Index::create()
        .table(Claims::Table)
        .col(Claims::UserId)
        .col(Claims::LockScope)
        .name("uq_claims_user_id_lock_scope")
        .unique()
        .to_owned()
}

#[derive(Iden)]
enum Claims {
    Table,
    Id,
    UserId,
    DealId,
    Status,
    ClaimCode,
    LockScope,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Deals {
    Table,
    Id,
}
