pub use sea_orm_migration::prelude::*;

mod m20260512_000001_init;
mod m20260519_100000_recruitment;
mod m20260602_140000_recruitment_v2;
mod m20260616_090000_payroll_reviews;
mod m20260707_110000_employee_portal;
mod m20260721_150000_compliance;

pub struct Migrator;
#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260512_000001_init::Migration),
            Box::new(m20260519_100000_recruitment::Migration),
            Box::new(m20260602_140000_recruitment_v2::Migration),
            Box::new(m20260616_090000_payroll_reviews::Migration),
            Box::new(m20260707_110000_employee_portal::Migration),
            Box::new(m20260721_150000_compliance::Migration),
        ]
    }
}
