//! Migration: Create the user_services association table.
//!
//! Composite primary key (user_id, service_id); both sides cascade on
//! delete so removing a user or service removes its associations.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserServices::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserServices::UserId).integer().not_null())
                    .col(ColumnDef::new(UserServices::ServiceId).integer().not_null())
                    .col(
                        ColumnDef::new(UserServices::AdditionalInfo)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserServices::UserId)
                            .col(UserServices::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_services_user_id")
                            .from(UserServices::Table, UserServices::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_services_service_id")
                            .from(UserServices::Table, UserServices::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_services_service_id")
                    .table(UserServices::Table)
                    .col(UserServices::ServiceId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_user_services_service_id")
                    .table(UserServices::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserServices {
    Table,
    UserId,
    ServiceId,
    AdditionalInfo,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Services {
    Table,
    Id,
}
