//! Demo data
//!
//! Populates an empty store with a few departments and employees so a fresh
//! deployment has something to show. Everything goes through the service,
//! so the usual uniqueness and period rules apply.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::{DepartmentId, EmploymentStatus};
use crate::domain::ports::{DepartmentRepository, EmployeeRepository};
use crate::error::DomainError;

use super::department_service::DepartmentService;
use super::dto::{DepartmentRequest, EmployeeRequest};

struct DemoDepartment {
    name: &'static str,
    code: &'static str,
    description: &'static str,
    location: &'static str,
    head: &'static str,
    annual_budget: i64,
}

struct DemoEmployee {
    department_code: &'static str,
    first_name: &'static str,
    last_name: &'static str,
    email: &'static str,
    job_title: &'static str,
    status: EmploymentStatus,
    start_date: (i32, u32, u32),
}

const DEPARTMENTS: [DemoDepartment; 3] = [
    DemoDepartment {
        name: "Engineering",
        code: "ENG",
        description: "Responsible for product development and innovation.",
        location: "New York",
        head: "Ada Lovelace",
        annual_budget: 2_500_000,
    },
    DemoDepartment {
        name: "Human Resources",
        code: "HR",
        description: "Manages recruitment, onboarding, and employee wellbeing.",
        location: "Remote",
        head: "Mary Parker",
        annual_budget: 750_000,
    },
    DemoDepartment {
        name: "Finance",
        code: "FIN",
        description: "Oversees budgeting, forecasting, and compliance.",
        location: "Chicago",
        head: "Alan Turing",
        annual_budget: 1_500_000,
    },
];

const EMPLOYEES: [DemoEmployee; 4] = [
    DemoEmployee {
        department_code: "ENG",
        first_name: "Grace",
        last_name: "Hopper",
        email: "grace.hopper@example.com",
        job_title: "Principal Engineer",
        status: EmploymentStatus::Active,
        start_date: (2015, 4, 23),
    },
    DemoEmployee {
        department_code: "ENG",
        first_name: "Linus",
        last_name: "Torvalds",
        email: "linus.torvalds@example.com",
        job_title: "Staff Engineer",
        status: EmploymentStatus::OnLeave,
        start_date: (2018, 11, 4),
    },
    DemoEmployee {
        department_code: "HR",
        first_name: "Patricia",
        last_name: "Diaz",
        email: "patricia.diaz@example.com",
        job_title: "HR Specialist",
        status: EmploymentStatus::Active,
        start_date: (2020, 1, 15),
    },
    DemoEmployee {
        department_code: "FIN",
        first_name: "Noah",
        last_name: "Kim",
        email: "noah.kim@example.com",
        job_title: "Financial Analyst",
        status: EmploymentStatus::Active,
        start_date: (2019, 7, 1),
    },
];

/// Seed demo departments and employees when no department exists yet.
///
/// Returns `true` if data was written.
pub async fn seed_demo_data<DR, ER>(service: &DepartmentService<DR, ER>) -> Result<bool, DomainError>
where
    DR: DepartmentRepository,
    ER: EmployeeRepository,
{
    if !service.list_departments(None).await?.is_empty() {
        tracing::debug!("Departments already present, skipping demo data");
        return Ok(false);
    }

    let mut created: Vec<(&str, DepartmentId)> = Vec::with_capacity(DEPARTMENTS.len());
    for demo in &DEPARTMENTS {
        let request = DepartmentRequest {
            name: Some(demo.name.to_string()),
            code: Some(demo.code.to_string()),
            description: Some(demo.description.to_string()),
            location: Some(demo.location.to_string()),
            head: Some(demo.head.to_string()),
            annual_budget: Some(Decimal::from(demo.annual_budget)),
        };
        let department = service.create_department(&request).await?;
        created.push((demo.code, DepartmentId(department.id)));
    }

    for demo in &EMPLOYEES {
        let (_, department_id) = created
            .iter()
            .find(|(code, _)| *code == demo.department_code)
            .ok_or_else(|| {
                DomainError::Internal(format!(
                    "Demo employee {} references unknown department {}",
                    demo.email, demo.department_code
                ))
            })?;
        let (year, month, day) = demo.start_date;
        let request = EmployeeRequest {
            first_name: Some(demo.first_name.to_string()),
            last_name: Some(demo.last_name.to_string()),
            email: Some(demo.email.to_string()),
            job_title: Some(demo.job_title.to_string()),
            status: Some(demo.status),
            start_date: NaiveDate::from_ymd_opt(year, month, day),
            end_date: None,
        };
        service.add_employee(department_id, &request).await?;
    }

    tracing::info!(
        departments = DEPARTMENTS.len(),
        employees = EMPLOYEES.len(),
        "Demo data seeded"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::test_utils::{
        department_request, InMemoryDepartmentRepository, InMemoryEmployeeRepository,
        InMemoryStore,
    };

    fn create_service(
        store: &InMemoryStore,
    ) -> DepartmentService<InMemoryDepartmentRepository, InMemoryEmployeeRepository> {
        DepartmentService::new(Arc::new(store.departments()), Arc::new(store.employees()))
    }

    #[tokio::test]
    async fn seeds_empty_store() {
        let store = InMemoryStore::new();
        let service = create_service(&store);

        assert!(seed_demo_data(&service).await.unwrap());
        assert_eq!(store.department_count(), 3);
        assert_eq!(store.employee_count(), 4);

        let departments = service.list_departments(None).await.unwrap();
        let names: Vec<_> = departments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Engineering", "Finance", "Human Resources"]);
        assert_eq!(departments[0].employee_count, 2);
        assert_eq!(departments[0].annual_budget, Decimal::new(2_500_000, 0));
    }

    #[tokio::test]
    async fn seeded_employees_keep_their_status() {
        let store = InMemoryStore::new();
        let service = create_service(&store);
        seed_demo_data(&service).await.unwrap();

        let engineering = service.list_departments(Some("eng")).await.unwrap();
        let detail = service
            .get_department(&DepartmentId(engineering[0].id))
            .await
            .unwrap();

        assert_eq!(detail.employees[0].last_name, "Hopper");
        assert_eq!(detail.employees[1].status, EmploymentStatus::OnLeave);
    }

    #[test]
    fn every_demo_employee_has_a_demo_department() {
        for employee in &EMPLOYEES {
            assert!(
                DEPARTMENTS.iter().any(|d| d.code == employee.department_code),
                "{} has no department",
                employee.email
            );
        }
    }

    #[tokio::test]
    async fn leaves_populated_store_alone() {
        let store = InMemoryStore::new();
        let service = create_service(&store);
        service
            .create_department(&department_request("Research", "RES"))
            .await
            .unwrap();

        assert!(!seed_demo_data(&service).await.unwrap());
        assert_eq!(store.department_count(), 1);
        assert_eq!(store.employee_count(), 0);
    }
}
