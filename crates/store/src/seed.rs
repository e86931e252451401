//! Bundled sample data.
//!
//! Project aggregates (`comment_count`) are the figures the sample data
//! ships with and intentionally differ from the comment collection.

use projectdesk_core::comment::Comment;
use projectdesk_core::employee::Employee;
use projectdesk_core::project::{Project, ProjectStatus};
use projectdesk_core::work_log::WorkLog;

fn employee(id: &str, name: &str, email: &str, role: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
    }
}

fn comment(id: &str, author: &str, timestamp: &str, text: &str, project_id: &str) -> Comment {
    Comment {
        id: id.to_string(),
        author: author.to_string(),
        date: timestamp.get(..10).unwrap_or(timestamp).to_string(),
        text: text.to_string(),
        project_id: project_id.to_string(),
        timestamp: timestamp.to_string(),
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        employee("1", "Sarah Johnson", "sarah@company.com", "Project Manager"),
        employee("2", "Michael Chen", "michael@company.com", "Developer"),
        employee("3", "Emma Wilson", "emma@company.com", "Designer"),
        employee("4", "James Brown", "james@company.com", "Developer"),
    ]
}

pub fn comments() -> Vec<Comment> {
    vec![
        comment("c1", "Sarah Johnson", "2025-03-10T10:30:00", "Completed the initial wireframes and user flow diagrams", "p1"),
        comment("c2", "Michael Chen", "2025-03-10T14:20:00", "Set up the authentication system with JWT tokens", "p1"),
        comment("c3", "Emma Wilson", "2025-03-09T11:15:00", "Finalized the color palette and typography system", "p1"),
        comment("c4", "James Brown", "2025-03-08T16:45:00", "Implemented the dashboard API endpoints", "p2"),
        comment("c5", "Sarah Johnson", "2025-03-08T09:30:00", "Reviewed the project requirements with the client", "p2"),
        comment("c6", "Michael Chen", "2025-03-07T15:00:00", "Fixed critical bugs in the payment processing flow", "p1"),
        comment("c7", "Emma Wilson", "2025-03-06T13:45:00", "Created responsive layouts for mobile devices", "p1"),
        comment("c8", "James Brown", "2025-03-05T10:20:00", "Optimized database queries for better performance", "p1"),
        comment("c9", "Sarah Johnson", "2025-03-04T14:00:00", "Conducted user testing session with 5 participants", "p1"),
        comment("c10", "Michael Chen", "2025-03-03T11:30:00", "Integrated third-party analytics service", "p1"),
        comment("c11", "Emma Wilson", "2025-02-28T16:15:00", "Designed new onboarding flow screens", "p1"),
        comment("c12", "James Brown", "2025-02-27T09:45:00", "Implemented real-time notifications feature", "p1"),
    ]
}

pub fn projects() -> Vec<Project> {
    let comments = comments();
    let preview = |project_id: &str, limit: usize| -> Vec<Comment> {
        comments
            .iter()
            .filter(|c| c.project_id == project_id)
            .take(limit)
            .cloned()
            .collect()
    };

    vec![
        Project {
            id: "p1".to_string(),
            name: "E-Commerce Platform Redesign".to_string(),
            description: "Complete overhaul of the existing e-commerce platform with modern UI/UX and improved performance".to_string(),
            status: ProjectStatus::Active,
            comment_count: 24,
            team_size: 5,
            recent_comments: preview("p1", 3),
        },
        Project {
            id: "p2".to_string(),
            name: "Mobile App Development".to_string(),
            description: "Native iOS and Android app for customer engagement and loyalty program".to_string(),
            status: ProjectStatus::Active,
            comment_count: 18,
            team_size: 4,
            recent_comments: preview("p2", usize::MAX),
        },
        Project {
            id: "p3".to_string(),
            name: "Analytics Dashboard".to_string(),
            description: "Real-time analytics dashboard for tracking key business metrics and KPIs".to_string(),
            status: ProjectStatus::NotStarted,
            comment_count: 3,
            team_size: 3,
            recent_comments: Vec::new(),
        },
        Project {
            id: "p4".to_string(),
            name: "Customer Portal".to_string(),
            description: "Self-service portal for customers to manage their accounts and subscriptions".to_string(),
            status: ProjectStatus::Completed,
            comment_count: 45,
            team_size: 6,
            recent_comments: vec![comment(
                "c13",
                "Michael Chen",
                "2025-02-28T17:00:00",
                "Final deployment completed successfully",
                "p4",
            )],
        },
        Project {
            id: "p5".to_string(),
            name: "API Integration".to_string(),
            description: "Integration with third-party payment and shipping APIs".to_string(),
            status: ProjectStatus::Active,
            comment_count: 12,
            team_size: 2,
            recent_comments: Vec::new(),
        },
        Project {
            id: "p6".to_string(),
            name: "Marketing Website".to_string(),
            description: "New marketing website with SEO optimization and content management system".to_string(),
            status: ProjectStatus::NotStarted,
            comment_count: 0,
            team_size: 4,
            recent_comments: Vec::new(),
        },
    ]
}

pub fn work_logs() -> Vec<WorkLog> {
    let comments = comments();
    let log = |id: &str, employee_id: &str, comment_index: usize| -> WorkLog {
        let comment = comments[comment_index].clone();
        WorkLog {
            id: id.to_string(),
            date: comment.date.clone(),
            employee_id: employee_id.to_string(),
            project_id: comment.project_id.clone(),
            comments: vec![comment],
        }
    };

    vec![log("w1", "1", 0), log("w2", "2", 1), log("w3", "3", 2)]
}
