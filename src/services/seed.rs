//! Demonstration seed data.
//!
//! A fixed set of text samples, mixing clean text with examples carrying
//! intentional grammar, factual, and truncation problems for annotation
//! practice.

use crate::models::TextSample;
use crate::repository::{DieselError, TextSampleRepository};

/// Outcome of the idempotent seed routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Samples already present; nothing was inserted.
    AlreadyInitialized(u64),
    /// Fresh database; this many samples were inserted.
    Created(usize),
}

const SEED_SOURCE: &str = "Demo";

/// (text, topic) pairs inserted by `initialize_samples`.
const SEED_SAMPLES: &[(&str, &str)] = &[
    (
        "The quick brown fox jumps over the lazy dog. This sentence contains every letter of the alphabet at least once.",
        "Grammar Example",
    ),
    (
        "Artificial intelligence has revolutionized many industries, from healthcare to autonomous vehicles, enabling unprecedented levels of automation and efficiency.",
        "Technology",
    ),
    (
        "Climate change is one of the most pressing issues of our time, requiring immediate global action to reduce greenhouse gas emissions and transition to renewable energy sources.",
        "Environment",
    ),
    (
        "The recipe for chocolate cake requires flour, sugar, eggs, and cocoa powder. Mix ingredients and bake at 350 degrees for 30 minutes.",
        "Cooking",
    ),
    (
        "Shakespeare wrote many famous plays including Hamlet, Romeo and Juliet, and Macbeth during the Elizabethan era of English literature.",
        "Literature",
    ),
    (
        "The stock market experienced significant volatility last week due to concerns about inflation and interest rate changes announced by the Federal Reserve.",
        "Finance",
    ),
    (
        "Regular exercise is essential for maintaining good health. It helps strengthen muscles, improve cardiovascular function, and boost mental wellbeing.",
        "Health",
    ),
    (
        "The new smartphone features include a 48-megapixel camera, 5G connectivity, and a battery life of up to 24 hours under normal usage conditions.",
        "Technology",
    ),
    (
        "Education is the foundation of personal growth and societal development. It empowers individuals to think critically and contribute meaningfully to their communities.",
        "Education",
    ),
    (
        "The museum's new exhibition showcases ancient artifacts from Egyptian civilization, including pottery, jewelry, and hieroglyphic inscriptions dating back 3000 years.",
        "History",
    ),
    // Samples with intentional issues for annotation practice.
    (
        "Their going to the store later today and they're planning to buy some grocerys for dinner tonight.",
        "Grammar Practice",
    ),
    (
        "The capital of France is Berlin and it's known for the Eiffel Tower and delicious pasta dishes.",
        "Geography",
    ),
    (
        "Water boils at 100 degrees Celsius at sea level atmospheric pressure which equals",
        "Science",
    ),
    (
        "To make a paper airplane, first take a rectangular piece of paper and fold it in half lengthwise.",
        "Instructions",
    ),
    (
        "The movie was absolutely terrible and boring. I hated every minute of it and would never recommend it to anyone.",
        "Movie Review",
    ),
];

/// Insert the fixed seed set unless any sample already exists.
pub async fn initialize_samples(
    repo: &TextSampleRepository,
) -> Result<SeedOutcome, DieselError> {
    let existing = repo.count().await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadyInitialized(existing));
    }

    let mut created = 0;
    for (text, topic) in SEED_SAMPLES {
        let sample = TextSample::new(
            text.to_string(),
            Some(SEED_SOURCE.to_string()),
            Some(topic.to_string()),
        );
        repo.save(&sample).await?;
        created += 1;
    }

    Ok(SeedOutcome::Created(created))
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel_async::SimpleAsyncConnection;
    use tempfile::tempdir;

    use crate::repository::AsyncSqlitePool;

    async fn setup_test_db() -> (AsyncSqlitePool, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let pool = AsyncSqlitePool::from_path(&db_path);
        let mut conn = pool.get().await.unwrap();
        conn.batch_execute(include_str!("../repository/schema_sqlite.sql"))
            .await
            .unwrap();

        (pool, dir)
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let (pool, _dir) = setup_test_db().await;
        let repo = TextSampleRepository::new(pool);

        let first = initialize_samples(&repo).await.unwrap();
        assert_eq!(first, SeedOutcome::Created(SEED_SAMPLES.len()));

        let count_after_first = repo.count().await.unwrap();
        assert_eq!(count_after_first, SEED_SAMPLES.len() as u64);

        let second = initialize_samples(&repo).await.unwrap();
        assert_eq!(
            second,
            SeedOutcome::AlreadyInitialized(count_after_first)
        );
        assert_eq!(repo.count().await.unwrap(), count_after_first);
    }

    #[tokio::test]
    async fn test_seed_runs_even_with_one_manual_sample() {
        let (pool, _dir) = setup_test_db().await;
        let repo = TextSampleRepository::new(pool);

        let sample = crate::models::TextSample::new("existing".to_string(), None, None);
        repo.save(&sample).await.unwrap();

        let outcome = initialize_samples(&repo).await.unwrap();
        assert_eq!(outcome, SeedOutcome::AlreadyInitialized(1));
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
