use sea_orm_migration::prelude::*;

#[derive(DeriveIden, Copy, Clone)]
enum Jobs {
    Table,
    Id,
    Title,
    Department,
    Location,
    SalaryRange,
    Description,
    Requirements,
    Status,
    PostedDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden, Copy, Clone)]
enum Candidates {
    Table,
    Id,
    Name,
    Email,
    JobId,
    Status,
    CreatedAt,
}

#[derive(DeriveIden, Copy, Clone)]
enum Interviews {
    Table,
    Id,
    CandidateId,
    Notes,
    Status,
    CreatedAt,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Jobs::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(Jobs::Id))
                    .col(ColumnDef::new(Jobs::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Jobs::Department).string_len(128).not_null())
                    .col(ColumnDef::new(Jobs::Location).string_len(255).not_null())
                    .col(ColumnDef::new(Jobs::SalaryRange).string_len(128))
                    .col(ColumnDef::new(Jobs::Description).text())
                    .col(ColumnDef::new(Jobs::Requirements).text())
                    .col(
                        ColumnDef::new(Jobs::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::cust("'active'")),
                    )
                    .col(&mut timestamp_with_default(Jobs::PostedDate))
                    .col(&mut timestamp_with_default(Jobs::CreatedAt))
                    .col(&mut timestamp_with_default(Jobs::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_status")
                    .table(Jobs::Table)
                    .col(Jobs::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_posted_date")
                    .table(Jobs::Table)
                    .col(Jobs::PostedDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Candidates::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(Candidates::Id))
                    .col(ColumnDef::new(Candidates::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Candidates::Email).string_len(320).not_null())
                    .col(ColumnDef::new(Candidates::JobId).uuid())
                    .col(
                        ColumnDef::new(Candidates::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::cust("'applied'")),
                    )
                    .col(&mut timestamp_with_default(Candidates::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_candidates_job")
                            .from(Candidates::Table, Candidates::JobId)
                            .to(Jobs::Table, Jobs::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_candidates_job")
                    .table(Candidates::Table)
                    .col(Candidates::JobId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_candidates_status")
                    .table(Candidates::Table)
                    .col(Candidates::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Interviews::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk(Interviews::Id))
                    .col(ColumnDef::new(Interviews::CandidateId).uuid().not_null())
                    .col(ColumnDef::new(Interviews::Notes).text())
                    .col(
                        ColumnDef::new(Interviews::Status)
                            .string_len(32)
                            .not_null()
                            .default(Expr::cust("'scheduled'")),
                    )
                    .col(&mut timestamp_with_default(Interviews::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interviews_candidate")
                            .from(Interviews::Table, Interviews::CandidateId)
                            .to(Candidates::Table, Candidates::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interviews_candidate")
                    .table(Interviews::Table)
                    .col(Interviews::CandidateId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_interviews_status")
                    .table(Interviews::Table)
                    .col(Interviews::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Interviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Candidates::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Jobs::Table).to_owned())
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
