use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Jobs {
    Table,
    EmploymentType,
    Benefits,
}

#[derive(DeriveIden)]
enum Candidates {
    Table,
    ResumeUrl,
    Phone,
    Notes,
    AppliedDate,
}

#[derive(DeriveIden)]
enum Interviews {
    Table,
    ScheduledDate,
    InterviewerId,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Admins {
    Table,
    Id,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

// Column patches for tables that shipped before the recruitment screens grew
// their full field set. Every step is guarded so the migration can be replayed
// against databases that already picked up some of these columns.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Jobs::Table)
                    .add_column_if_not_exists(
                        ColumnDef::new(Jobs::EmploymentType).string_len(32),
                    )
                    .add_column_if_not_exists(
                        ColumnDef::new(Jobs::Benefits)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Candidates::Table)
                    .add_column_if_not_exists(
                        ColumnDef::new(Candidates::ResumeUrl).string_len(512),
                    )
                    .add_column_if_not_exists(ColumnDef::new(Candidates::Phone).string_len(64))
                    .add_column_if_not_exists(ColumnDef::new(Candidates::Notes).text())
                    .add_column_if_not_exists(
                        ColumnDef::new(Candidates::AppliedDate)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Interviews::Table)
                    .add_column_if_not_exists(
                        ColumnDef::new(Interviews::ScheduledDate).timestamp_with_time_zone(),
                    )
                    .add_column_if_not_exists(ColumnDef::new(Interviews::InterviewerId).uuid())
                    .add_column_if_not_exists(
                        ColumnDef::new(Interviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::cust("now()")),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_interviews_interviewer")
                    .from(Interviews::Table, Interviews::InterviewerId)
                    .to(Admins::Table, Admins::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interviews_scheduled_date")
                    .table(Interviews::Table)
                    .col(Interviews::ScheduledDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_interviews_scheduled_date")
                    .table(Interviews::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_interviews_interviewer")
                    .table(Interviews::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Interviews::Table)
                    .drop_column(Interviews::ScheduledDate)
                    .drop_column(Interviews::InterviewerId)
                    .drop_column(Interviews::UpdatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Candidates::Table)
                    .drop_column(Candidates::ResumeUrl)
                    .drop_column(Candidates::Phone)
                    .drop_column(Candidates::Notes)
                    .drop_column(Candidates::AppliedDate)
                    .to_owned(),
            )
            .await?;
        manager
            .alter_table(
                Table::alter()
                    .table(Jobs::Table)
                    .drop_column(Jobs::EmploymentType)
                    .drop_column(Jobs::Benefits)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
