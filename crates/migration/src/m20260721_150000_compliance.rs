use sea_orm_migration::prelude::*;

#[derive(DeriveIden, Copy, Clone)]
enum ComplianceRecords {
    Table,
    Id,
    EmployeeId,
    RecordType,
    Description,
    Status,
    ComplianceDate,
    Score,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden, Copy, Clone)]
enum Employees {
    Table,
    Id,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // employee_id stays nullable: records without one are company-wide.
        manager
            .create_table(
                Table::create()
                    .table(ComplianceRecords::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(ComplianceRecords::Id))
                    .col(ColumnDef::new(ComplianceRecords::EmployeeId).uuid())
                    .col(
                        ColumnDef::new(ComplianceRecords::RecordType)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(ColumnDef::new(ComplianceRecords::Description).text())
                    .col(
                        ColumnDef::new(ComplianceRecords::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::cust("'pending'")),
                    )
                    .col(ColumnDef::new(ComplianceRecords::ComplianceDate).date())
                    .col(ColumnDef::new(ComplianceRecords::Score).integer())
                    .col(ColumnDef::new(ComplianceRecords::Notes).text())
                    .col(&mut timestamp_with_default(ComplianceRecords::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_compliance_records_employee")
                            .from(ComplianceRecords::Table, ComplianceRecords::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_compliance_records_employee")
                    .table(ComplianceRecords::Table)
                    .col(ComplianceRecords::EmployeeId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_compliance_records_created_at")
                    .table(ComplianceRecords::Table)
                    .col(ComplianceRecords::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ComplianceRecords::Table).to_owned())
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
