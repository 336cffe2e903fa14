use chrono::{NaiveDate, TimeZone, Utc};
use entity::{
    admin, candidate, compliance_record, employee, interview, job, leave_request, payroll,
    performance_review,
};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use serde_json::json;
use uuid::Uuid;

use crate::auth::hash_password;

pub struct SeededHrRecords {
    pub admins: Vec<admin::Model>,
    pub employees: Vec<employee::Model>,
    pub jobs: Vec<job::Model>,
    pub candidates: Vec<candidate::Model>,
    pub interviews: Vec<interview::Model>,
}

impl SeededHrRecords {
    pub fn admin_username(&self, username: &str) -> Option<&admin::Model> {
        self.admins.iter().find(|a| a.username == username)
    }

    pub fn employee_email(&self, email: &str) -> Option<&employee::Model> {
        self.employees.iter().find(|e| e.email == email)
    }

    pub fn employee_badge(&self, badge: &str) -> Option<&employee::Model> {
        self.employees.iter().find(|e| e.employee_id == badge)
    }

    pub fn job_titled(&self, title: &str) -> Option<&job::Model> {
        self.jobs.iter().find(|j| j.title == title)
    }

    pub fn candidate_email(&self, email: &str) -> Option<&candidate::Model> {
        self.candidates.iter().find(|c| c.email == email)
    }
}

/// Inserts the demo dataset. Returns `None` without touching anything when
/// the demo admin already exists.
pub async fn seed_hr_demo(db: &DatabaseConnection) -> Result<Option<SeededHrRecords>, DbErr> {
    if admin::Entity::find()
        .filter(admin::Column::Username.eq("admin"))
        .one(db)
        .await?
        .is_some()
    {
        return Ok(None);
    }

    let seeded_at: DateTimeWithTimeZone = Utc::now().into();

    let root = admin::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set("admin".into()),
        password_hash: Set(seed_password("adminpass")?),
        created_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let amina = employee::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set("EMP000001".into()),
        name: Set("Amina Osei".into()),
        email: Set("amina.osei@hrsuite.test".into()),
        password_hash: Set(Some(seed_password("employeepass")?)),
        department: Set(Some("Engineering".into())),
        position: Set(Some("Senior Engineer".into())),
        salary: Set(Some(98_000.0)),
        phone: Set(Some("+1-555-0142".into())),
        address: Set(Some("17 Harbor Lane, Portland, OR".into())),
        start_date: Set(Some(naive_date(2023, 3, 1))),
        status: Set(employee::Status::Active),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let jonas = employee::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set("EMP000002".into()),
        name: Set("Jonas Berg".into()),
        email: Set("jonas.berg@hrsuite.test".into()),
        password_hash: Set(None),
        department: Set(Some("Engineering".into())),
        position: Set(Some("Platform Engineer".into())),
        salary: Set(Some(87_500.0)),
        phone: Set(Some("+1-555-0143".into())),
        address: Set(None),
        start_date: Set(Some(naive_date(2024, 1, 15))),
        status: Set(employee::Status::Active),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let priya = employee::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set("EMP000003".into()),
        name: Set("Priya Nair".into()),
        email: Set("priya.nair@hrsuite.test".into()),
        password_hash: Set(None),
        department: Set(Some("People Ops".into())),
        position: Set(Some("HR Generalist".into())),
        salary: Set(Some(64_000.0)),
        phone: Set(None),
        address: Set(None),
        start_date: Set(Some(naive_date(2022, 9, 12))),
        status: Set(employee::Status::Active),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let marco = employee::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set("EMP000004".into()),
        name: Set("Marco Ruiz".into()),
        email: Set("marco.ruiz@hrsuite.test".into()),
        password_hash: Set(None),
        department: Set(Some("Finance".into())),
        position: Set(Some("Accountant".into())),
        salary: Set(Some(71_000.0)),
        phone: Set(None),
        address: Set(None),
        start_date: Set(Some(naive_date(2021, 5, 3))),
        status: Set(employee::Status::Inactive),
        created_at: Set(seeded_at),
        updated_at: Set(seeded_at),
    }
    .insert(db)
    .await?;

    let backend_role = job::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Backend Engineer".into()),
        department: Set("Engineering".into()),
        location: Set("Remote".into()),
        employment_type: Set(Some(job::EmploymentType::FullTime)),
        salary_range: Set(Some("$110k-$140k".into())),
        description: Set(Some("Own the services behind the employee portal.".into())),
        requirements: Set(Some("Rust or comparable systems experience.".into())),
        benefits: Set(json!(["Health insurance", "Remote stipend"])),
        status: Set(job::Status::Active),
        posted_date: Set(timestamp(2026, 7, 1)),
        created_at: Set(timestamp(2026, 7, 1)),
        updated_at: Set(timestamp(2026, 7, 1)),
    }
    .insert(db)
    .await?;

    let office_role = job::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Office Manager".into()),
        department: Set("Operations".into()),
        location: Set("New York, NY".into()),
        employment_type: Set(Some(job::EmploymentType::PartTime)),
        salary_range: Set(None),
        description: Set(None),
        requirements: Set(None),
        benefits: Set(json!([])),
        status: Set(job::Status::Closed),
        posted_date: Set(timestamp(2026, 5, 12)),
        created_at: Set(timestamp(2026, 5, 12)),
        updated_at: Set(timestamp(2026, 6, 30)),
    }
    .insert(db)
    .await?;

    let dana = candidate::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set("Dana Whitfield".into()),
        email: Set("dana.whitfield@example.test".into()),
        phone: Set(Some("+1-555-0199".into())),
        job_id: Set(Some(backend_role.id)),
        resume_url: Set(Some("https://example.test/resumes/dana-whitfield.pdf".into())),
        notes: Set(Some("Referred by Jonas.".into())),
        status: Set(candidate::Status::Interview),
        applied_date: Set(timestamp(2026, 7, 20)),
        created_at: Set(timestamp(2026, 7, 20)),
    }
    .insert(db)
    .await?;

    let screen = interview::ActiveModel {
        id: Set(Uuid::new_v4()),
        candidate_id: Set(dana.id),
        interviewer_id: Set(Some(root.id)),
        scheduled_date: Set(Some(timestamp(2026, 9, 4))),
        notes: Set(Some("Technical screen.".into())),
        status: Set(interview::Status::Scheduled),
        created_at: Set(timestamp(2026, 7, 22)),
        updated_at: Set(timestamp(2026, 7, 22)),
    }
    .insert(db)
    .await?;

    payroll::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(amina.id),
        pay_period_start: Set(Some(naive_date(2026, 7, 1))),
        pay_period_end: Set(Some(naive_date(2026, 7, 31))),
        gross_salary: Set(Some(8_166.67)),
        net_salary: Set(Some(6_125.0)),
        deductions: Set(json!([
            { "label": "Income tax", "amount": 1_633.33 },
            { "label": "Pension", "amount": 408.34 },
        ])),
        status: Set(payroll::Status::Paid),
        payment_date: Set(Some(naive_date(2026, 8, 1))),
        created_at: Set(timestamp(2026, 7, 31)),
    }
    .insert(db)
    .await?;

    payroll::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(amina.id),
        pay_period_start: Set(Some(naive_date(2026, 8, 1))),
        pay_period_end: Set(Some(naive_date(2026, 8, 31))),
        gross_salary: Set(Some(8_166.67)),
        net_salary: Set(Some(6_125.0)),
        deductions: Set(json!([])),
        status: Set(payroll::Status::Pending),
        payment_date: Set(None),
        created_at: Set(timestamp(2026, 8, 20)),
    }
    .insert(db)
    .await?;

    payroll::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(jonas.id),
        pay_period_start: Set(Some(naive_date(2026, 7, 1))),
        pay_period_end: Set(Some(naive_date(2026, 7, 31))),
        gross_salary: Set(Some(7_291.67)),
        net_salary: Set(Some(5_540.0)),
        deductions: Set(json!([])),
        status: Set(payroll::Status::Pending),
        payment_date: Set(None),
        created_at: Set(timestamp(2026, 7, 31)),
    }
    .insert(db)
    .await?;

    performance_review::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(amina.id),
        reviewer_id: Set(Some(root.id)),
        review_period_start: Set(Some(naive_date(2026, 1, 1))),
        review_period_end: Set(Some(naive_date(2026, 6, 30))),
        rating: Set(Some(4)),
        comments: Set(Some("Strong delivery on the portal migration.".into())),
        goals: Set(json!(["Mentor the new platform hire"])),
        status: Set("completed".into()),
        created_at: Set(timestamp(2026, 7, 6)),
    }
    .insert(db)
    .await?;

    leave_request::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(amina.id),
        leave_type: Set(leave_request::LeaveType::Vacation),
        start_date: Set(naive_date(2026, 10, 5)),
        end_date: Set(naive_date(2026, 10, 9)),
        days_requested: Set(5),
        reason: Set(Some("Family trip.".into())),
        status: Set(leave_request::Status::Pending),
        created_at: Set(timestamp(2026, 8, 18)),
        updated_at: Set(timestamp(2026, 8, 18)),
    }
    .insert(db)
    .await?;

    compliance_record::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(Some(amina.id)),
        record_type: Set("Safety training".into()),
        description: Set(Some("Annual workplace safety refresher.".into())),
        status: Set("completed".into()),
        compliance_date: Set(Some(naive_date(2026, 7, 15))),
        score: Set(Some(92)),
        notes: Set(None),
        created_at: Set(timestamp(2026, 7, 15)),
    }
    .insert(db)
    .await?;

    compliance_record::ActiveModel {
        id: Set(Uuid::new_v4()),
        employee_id: Set(None),
        record_type: Set("Data protection audit".into()),
        description: Set(Some("Company-wide records handling audit.".into())),
        status: Set("pending".into()),
        compliance_date: Set(Some(naive_date(2026, 6, 2))),
        score: Set(Some(84)),
        notes: Set(Some("Follow-up on retention policy open.".into())),
        created_at: Set(timestamp(2026, 6, 2)),
    }
    .insert(db)
    .await?;

    Ok(Some(SeededHrRecords {
        admins: vec![root],
        employees: vec![amina, jonas, priya, marco],
        jobs: vec![backend_role, office_role],
        candidates: vec![dana],
        interviews: vec![screen],
    }))
}

fn seed_password(password: &str) -> Result<String, DbErr> {
    hash_password(password).map_err(|err| DbErr::Custom(format!("hash error: {}", err)))
}

fn naive_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn timestamp(year: i32, month: u32, day: u32) -> DateTimeWithTimeZone {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
        .single()
        .expect("valid seed timestamp")
        .into()
}
