// src/common/migrations.rs
//! Database migration, schema management and seed data

use sqlx::SqlitePool;
use std::env;
use tracing::{info, warn};

use super::id_generator::generate_role_id;

/// Run all database migrations
///
/// Tables are created if missing; existing data is preserved unless the
/// RESET_DB environment variable is set to "true".
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let should_reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

    if should_reset_db {
        warn!("⚠️  RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
    }

    create_tables(pool).await?;
    create_indexes(pool).await?;
    seed_job_roles(pool).await?;

    info!("✅ Database migration completed successfully!");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Children first so foreign keys never dangle mid-drop
    sqlx::query("DROP TABLE IF EXISTS analysis_history")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS resumes").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS job_roles").execute(pool).await?;
    sqlx::query("DROP TABLE IF EXISTS users").execute(pool).await?;
    Ok(())
}

async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS resumes (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            file_name TEXT NOT NULL,
            file_path TEXT NOT NULL,
            parsed_text TEXT,
            skills TEXT,
            education TEXT,
            experience TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS job_roles (
            id TEXT PRIMARY KEY,
            role_name TEXT UNIQUE NOT NULL,
            job_description TEXT NOT NULL,
            required_skills TEXT,
            industry TEXT,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS analysis_history (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            resume_id TEXT NOT NULL,
            role_id TEXT NOT NULL,
            job_match_score REAL NOT NULL,
            missing_skills TEXT,
            recommendations TEXT,
            created_at TEXT DEFAULT (datetime('now')),
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE,
            FOREIGN KEY (resume_id) REFERENCES resumes(id) ON DELETE CASCADE,
            FOREIGN KEY (role_id) REFERENCES job_roles(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_email ON users(email)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_resumes_user_id ON resumes(user_id)")
        .execute(pool)
        .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_analysis_history_user_id ON analysis_history(user_id)",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Default job role catalog: (role_name, job_description, required_skills, industry)
const DEFAULT_ROLES: &[(&str, &str, &[&str], &str)] = &[
    (
        "Software Developer",
        "Design, code, test and maintain software applications across the full SDLC.",
        &["Python", "JavaScript", "Git", "SQL", "Algorithms"],
        "Tech",
    ),
    (
        "Data Analyst",
        "Collect, clean and interpret data to drive business decisions.",
        &["SQL", "Excel", "Pandas", "Tableau", "Statistics"],
        "Tech",
    ),
    (
        "Machine Learning Engineer",
        "Build, train and deploy ML models at scale.",
        &["Python", "Machine Learning", "TensorFlow", "Scikit-learn", "Docker"],
        "Tech",
    ),
    (
        "Cloud Engineer",
        "Design, implement and manage cloud infrastructure and services.",
        &["AWS", "Azure", "Terraform", "Docker", "Networking"],
        "Tech",
    ),
    (
        "DevOps Engineer",
        "Automate CI/CD, infrastructure and monitoring pipelines.",
        &["Docker", "Kubernetes", "Jenkins", "Ansible", "Python"],
        "Tech",
    ),
    (
        "UI/UX Designer",
        "Create user-centred interfaces, wireframes and prototypes.",
        &["Figma", "User Research", "Prototyping", "HTML", "CSS"],
        "Design",
    ),
    (
        "Backend Developer",
        "Build server-side logic, APIs and data layers.",
        &["Python", "Node.js", "REST", "SQL", "Git"],
        "Tech",
    ),
    (
        "Frontend Developer",
        "Implement responsive user interfaces and client-side logic.",
        &["JavaScript", "React", "CSS", "HTML", "Webpack"],
        "Tech",
    ),
    (
        "Full-Stack Developer",
        "Work on both front-end and back-end codebases.",
        &["JavaScript", "React", "Node.js", "SQL", "Git"],
        "Tech",
    ),
    (
        "Business Analyst",
        "Bridge business needs and technical solutions via data and process analysis.",
        &["Excel", "SQL", "Documentation", "Agile", "Communication"],
        "Business",
    ),
    (
        "Project Manager",
        "Plan, execute and deliver projects on time and within budget.",
        &["Agile", "Scrum", "Communication", "Risk Management", "Leadership"],
        "Management",
    ),
    (
        "System Administrator",
        "Maintain servers, OS, backups and user accounts.",
        &["Linux", "Bash", "Networking", "AWS", "Scripting"],
        "Tech",
    ),
    (
        "QA Tester",
        "Design and execute test plans, automate regression suites.",
        &["Selenium", "Manual Testing", "Python", "JUnit", "CI/CD"],
        "Tech",
    ),
    (
        "Network Engineer",
        "Design, implement and troubleshoot network infrastructure.",
        &["Cisco", "Routing", "Switching", "TCP/IP", "Firewalls"],
        "Tech",
    ),
    (
        "Cybersecurity Analyst",
        "Monitor threats, perform vulnerability assessments, implement security controls.",
        &["SIEM", "Penetration Testing", "Risk Assessment", "Python", "Network Security"],
        "Security",
    ),
    (
        "Database Administrator",
        "Install, configure, secure and optimise database systems.",
        &["SQL", "PostgreSQL", "Backup & Recovery", "Performance Tuning", "Linux"],
        "Tech",
    ),
];

/// Seed the job role catalog on first startup (only when the table is empty)
async fn seed_job_roles(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM job_roles")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    for (role_name, description, required_skills, industry) in DEFAULT_ROLES {
        let skills: Vec<String> = required_skills.iter().map(|s| s.to_string()).collect();
        let skills_json =
            serde_json::to_string(&skills).unwrap_or_else(|_| "[]".to_string());

        sqlx::query(
            r#"
            INSERT INTO job_roles (id, role_name, job_description, required_skills, industry)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(generate_role_id())
        .bind(role_name)
        .bind(description)
        .bind(skills_json)
        .bind(industry)
        .execute(pool)
        .await?;
    }

    info!("📊 Seeded {} default job roles", DEFAULT_ROLES.len());
    Ok(())
}
