use sea_orm_migration::prelude::*;

#[derive(DeriveIden, Copy, Clone)]
enum Admins {
    Table,
    Id,
    Username,
    PasswordHash,
    CreatedAt,
}

#[derive(DeriveIden, Copy, Clone)]
enum Employees {
    Table,
    Id,
    EmployeeId,
    Name,
    Email,
    Department,
    Position,
    Salary,
    Phone,
    Address,
    StartDate,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Extensions (safe if already present)
        manager
            .get_connection()
            .execute_unprepared(r#"CREATE EXTENSION IF NOT EXISTS "pgcrypto";"#)
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(Admins::Id))
                    .col(
                        ColumnDef::new(Admins::Username)
                            .string_len(128)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Admins::PasswordHash)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(&mut timestamp_with_default(Admins::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(Employees::Id))
                    .col(
                        ColumnDef::new(Employees::EmployeeId)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Employees::Email)
                            .string_len(320)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Employees::Department).string_len(128))
                    .col(ColumnDef::new(Employees::Position).string_len(128))
                    .col(ColumnDef::new(Employees::Salary).double())
                    .col(ColumnDef::new(Employees::Phone).string_len(64))
                    .col(ColumnDef::new(Employees::Address).text())
                    .col(ColumnDef::new(Employees::StartDate).date())
                    .col(
                        ColumnDef::new(Employees::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::cust("'active'")),
                    )
                    .col(&mut timestamp_with_default(Employees::CreatedAt))
                    .col(&mut timestamp_with_default(Employees::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_status")
                    .table(Employees::Table)
                    .col(Employees::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_employees_created_at")
                    .table(Employees::Table)
                    .col(Employees::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        Ok(())
    }
}

fn uuid_pk<C: Iden + 'static>(col: C) -> ColumnDef {
    let mut column = ColumnDef::new(col);
    column
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"));
    column
}

fn timestamp_with_default<C: Iden + 'static>(col: C) -> ColumnDef {
    let mut column = ColumnDef::new(col);
    column
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::cust("now()"));
    column
}
