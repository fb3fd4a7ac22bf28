use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tutormatch_engine::models::{
    FailureResponse, InteractionRecord, Mode, PriceBand, StudentId, StudentPreference, TutorId,
    TutorProfile,
};
use tutormatch_engine::services::providers::memory::{
    InMemoryInteractionStore, InMemoryStudentDirectory, InMemoryTutorCatalog,
};
use tutormatch_engine::{EngineConfig, RecommendationRequest, RecommendationService};

/// Demo runner: seeds the in-memory providers with a small catalog and prints
/// the ranked response for a representative request as JSON.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = EngineConfig::from_env()?;
    let service = RecommendationService::new(
        config,
        Arc::new(demo_catalog()),
        Arc::new(demo_directory()),
        Arc::new(demo_interactions()),
    )?;

    let request = RecommendationRequest {
        student_id: Some(StudentId::from("student_1")),
        subject: Some("Math".to_string()),
        mode: Some(Mode::Online),
        preferred_price_range: Some(PriceBand::Medium),
        top_k: Some(5),
        ..RecommendationRequest::default()
    };

    match service.recommend(request).await {
        Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
        Err(err) => {
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&FailureResponse::from(&err))?
            );
            std::process::exit(1);
        }
    }

    Ok(())
}

fn demo_tutor(
    id: &str,
    name: &str,
    subject: &str,
    mode: Mode,
    years: u32,
    rate: f64,
    education: &str,
    rating: f64,
    location: &str,
) -> TutorProfile {
    TutorProfile {
        tutor_id: TutorId::from(id),
        name: name.to_string(),
        subject: subject.to_string(),
        mode,
        experience_years: years,
        hourly_rate: rate,
        education_level: tutormatch_engine::models::EducationLevel::parse(education),
        rating,
        location: location.to_string(),
    }
}

fn demo_catalog() -> InMemoryTutorCatalog {
    let mut catalog = InMemoryTutorCatalog::new();
    catalog.add_tutor(demo_tutor(
        "tutor_1", "Asha Gurung", "Math", Mode::Online, 5, 800.0, "phd", 4.8, "Kathmandu",
    ));
    catalog.add_tutor(demo_tutor(
        "tutor_2", "Bibek Shrestha", "Physics", Mode::Hybrid, 8, 1200.0, "phd", 4.9, "Lalitpur",
    ));
    catalog.add_tutor(demo_tutor(
        "tutor_3", "Chandra Rai", "English", Mode::Offline, 3, 500.0, "master", 4.5, "Bhaktapur",
    ));
    catalog.add_tutor(demo_tutor(
        "tutor_4", "Dipesh Karki", "Math", Mode::Online, 7, 1000.0, "phd", 4.7, "Kathmandu",
    ));
    catalog.add_tutor(demo_tutor(
        "tutor_5",
        "Elina Tamang",
        "Computer Science",
        Mode::Online,
        4,
        900.0,
        "master",
        4.6,
        "Kathmandu",
    ));
    catalog.add_tutor(demo_tutor(
        "tutor_6", "Firoj Thapa", "Math", Mode::Offline, 2, 600.0, "bachelor", 4.3, "Lalitpur",
    ));
    catalog.add_tutor(demo_tutor(
        "tutor_7", "Gita Adhikari", "Physics", Mode::Online, 10, 1500.0, "phd", 5.0, "Kathmandu",
    ));
    catalog.add_tutor(demo_tutor(
        "tutor_8", "Hari Basnet", "English", Mode::Hybrid, 6, 750.0, "master", 4.4, "Bhaktapur",
    ));
    catalog
}

fn demo_directory() -> InMemoryStudentDirectory {
    let mut directory = InMemoryStudentDirectory::new();
    directory.add_student(
        StudentId::from("student_1"),
        StudentPreference {
            subject: "Math".to_string(),
            mode: Mode::Online,
            ..StudentPreference::default()
        },
    );
    directory.add_student(
        StudentId::from("student_2"),
        StudentPreference {
            subject: "Physics".to_string(),
            mode: Mode::Hybrid,
            preferred_price_range: PriceBand::High,
            ..StudentPreference::default()
        },
    );
    directory
}

fn demo_interactions() -> InMemoryInteractionStore {
    let mut store = InMemoryInteractionStore::new();
    for (student, tutor, rating) in [
        ("student_1", "tutor_1", 5.0),
        ("student_1", "tutor_4", 4.5),
        ("student_1", "tutor_6", 3.0),
        ("student_2", "tutor_2", 5.0),
        ("student_2", "tutor_7", 4.8),
        ("student_3", "tutor_3", 4.5),
        ("student_3", "tutor_8", 4.0),
        ("student_4", "tutor_1", 4.7),
        ("student_4", "tutor_4", 4.9),
        ("student_4", "tutor_6", 2.5),
    ] {
        store.add_record(InteractionRecord::new(student, tutor, rating));
    }
    store
}
