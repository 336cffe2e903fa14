use sea_orm_migration::prelude::*;

#[derive(DeriveIden, Copy, Clone)]
enum Employees {
    Table,
    Id,
    PasswordHash,
}

#[derive(DeriveIden, Copy, Clone)]
enum LeaveRequests {
    Table,
    Id,
    EmployeeId,
    LeaveType,
    StartDate,
    EndDate,
    DaysRequested,
    Reason,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

// Self-service portal: employees get a login credential and can file leave
// requests. password_hash stays nullable, admins provision it per employee.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Employees::Table)
                    .add_column_if_not_exists(
                        ColumnDef::new(Employees::PasswordHash).string_len(255),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LeaveRequests::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(LeaveRequests::Id))
                    .col(ColumnDef::new(LeaveRequests::EmployeeId).uuid().not_null())
                    .col(
                        ColumnDef::new(LeaveRequests::LeaveType)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(LeaveRequests::StartDate).date().not_null())
                    .col(ColumnDef::new(LeaveRequests::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(LeaveRequests::DaysRequested)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LeaveRequests::Reason).text())
                    .col(
                        ColumnDef::new(LeaveRequests::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::cust("'pending'")),
                    )
                    .col(&mut timestamp_with_default(LeaveRequests::CreatedAt))
                    .col(&mut timestamp_with_default(LeaveRequests::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_leave_requests_employee")
                            .from(LeaveRequests::Table, LeaveRequests::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_leave_requests_employee")
                    .table(LeaveRequests::Table)
                    .col(LeaveRequests::EmployeeId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_leave_requests_status")
                    .table(LeaveRequests::Table)
                    .col(LeaveRequests::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaveRequests::Table).to_owned())
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Employees::Table)
                    .drop_column(Employees::PasswordHash)
                    .to_owned(),
            )
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
