use sea_orm_migration::prelude::*;

#[derive(DeriveIden, Copy, Clone)]
enum Payroll {
    Table,
    Id,
    EmployeeId,
    PayPeriodStart,
    PayPeriodEnd,
    GrossSalary,
    NetSalary,
    Deductions,
    Status,
    PaymentDate,
    CreatedAt,
}

#[derive(DeriveIden, Copy, Clone)]
enum PerformanceReviews {
    Table,
    Id,
    EmployeeId,
    ReviewerId,
    ReviewPeriodStart,
    ReviewPeriodEnd,
    Rating,
    Comments,
    Goals,
    Status,
    CreatedAt,
}

#[derive(DeriveIden, Copy, Clone)]
enum Employees {
    Table,
    Id,
}

#[derive(DeriveIden, Copy, Clone)]
enum Admins {
    Table,
    Id,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payroll::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(Payroll::Id))
                    .col(ColumnDef::new(Payroll::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(Payroll::PayPeriodStart).date())
                    .col(ColumnDef::new(Payroll::PayPeriodEnd).date())
                    .col(ColumnDef::new(Payroll::GrossSalary).double())
                    .col(ColumnDef::new(Payroll::NetSalary).double())
                    .col(
                        ColumnDef::new(Payroll::Deductions)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Payroll::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::cust("'pending'")),
                    )
                    .col(ColumnDef::new(Payroll::PaymentDate).date())
                    .col(&mut timestamp_with_default(Payroll::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payroll_employee")
                            .from(Payroll::Table, Payroll::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payroll_employee")
                    .table(Payroll::Table)
                    .col(Payroll::EmployeeId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_payroll_status")
                    .table(Payroll::Table)
                    .col(Payroll::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PerformanceReviews::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(PerformanceReviews::Id))
                    .col(
                        ColumnDef::new(PerformanceReviews::EmployeeId)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PerformanceReviews::ReviewerId).uuid())
                    .col(ColumnDef::new(PerformanceReviews::ReviewPeriodStart).date())
                    .col(ColumnDef::new(PerformanceReviews::ReviewPeriodEnd).date())
                    .col(ColumnDef::new(PerformanceReviews::Rating).integer())
                    .col(ColumnDef::new(PerformanceReviews::Comments).text())
                    .col(
                        ColumnDef::new(PerformanceReviews::Goals)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(PerformanceReviews::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::cust("'completed'")),
                    )
                    .col(&mut timestamp_with_default(PerformanceReviews::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_reviews_employee")
                            .from(PerformanceReviews::Table, PerformanceReviews::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_performance_reviews_reviewer")
                            .from(PerformanceReviews::Table, PerformanceReviews::ReviewerId)
                            .to(Admins::Table, Admins::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_performance_reviews_employee")
                    .table(PerformanceReviews::Table)
                    .col(PerformanceReviews::EmployeeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PerformanceReviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payroll::Table).to_owned())
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
