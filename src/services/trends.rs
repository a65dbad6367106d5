use chrono::{NaiveDateTime, Utc};

use crate::domain::trend::{FashionTrend, NewFashionTrend};
use crate::domain::types::TrendId;
use crate::generation::{self, TextGenerator};
use crate::repository::{TrendListQuery, TrendReader, TrendWriter};

use super::{ServiceError, ServiceResult};

pub fn list_trends<R>(query: TrendListQuery, repo: &R) -> ServiceResult<Vec<FashionTrend>>
where
    R: TrendReader,
{
    repo.list_trends(query).map_err(|e| {
        log::error!("Failed to list trends: {e}");
        ServiceError::Internal
    })
}

/// Generate a trend summary for `now` and store it.
///
/// Returns only what was stored; entries the model got wrong are skipped.
pub async fn generate_trends<R, G>(
    now: NaiveDateTime,
    repo: &R,
    generator: &G,
) -> ServiceResult<Vec<FashionTrend>>
where
    R: TrendWriter,
    G: TextGenerator,
{
    let generated = generation::summarize_trends(generator, now.date())
        .await
        .map_err(|e| {
            log::error!("Failed to generate trends: {e}");
            ServiceError::Internal
        })?;

    let trends: Vec<NewFashionTrend> = generated
        .trends
        .into_iter()
        .filter_map(|generated| {
            let title = generated.title.clone();
            match generated.into_new_trend(now) {
                Ok(trend) => Some(trend),
                Err(e) => {
                    log::warn!("Skipping generated trend \"{title}\": {e}");
                    None
                }
            }
        })
        .collect();

    if trends.is_empty() {
        return Ok(Vec::new());
    }

    repo.create_trends(&trends).map_err(|e| {
        log::error!("Failed to store trends: {e}");
        ServiceError::Internal
    })
}

/// Generate trends as of the current time.
pub async fn generate_current_trends<R, G>(
    repo: &R,
    generator: &G,
) -> ServiceResult<Vec<FashionTrend>>
where
    R: TrendWriter,
    G: TextGenerator,
{
    generate_trends(Utc::now().naive_utc(), repo, generator).await
}

/// Delete a trend; unknown ids are a no-op.
pub fn delete_trend<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: TrendWriter,
{
    let Ok(id) = TrendId::new(id) else {
        return Ok(());
    };

    match repo.delete_trend(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete trend {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dates::parse_timestamp;
    use crate::generation::GenerationError;
    use crate::generation::test::StubGenerator;
    use crate::repository::test::TestRepository;

    const REPLY: &str = r#"{
        "trends": [
            {
                "title": "Butter yellow",
                "description": "Soft yellow everywhere",
                "category": "colors",
                "season": "summer",
                "imageUrl": null,
                "source": "Runway reports",
                "validFrom": "2025-06-01",
                "validTo": "2025-08-31"
            },
            {
                "title": "Last winter",
                "description": "Already over",
                "category": "outerwear",
                "season": "winter",
                "validFrom": "2025-01-01",
                "validTo": "2025-02-28"
            },
            {
                "title": "",
                "description": "Missing title",
                "category": "misc",
                "season": "summer",
                "validFrom": "2025-06-01",
                "validTo": "2025-06-30"
            }
        ]
    }"#;

    fn now() -> NaiveDateTime {
        parse_timestamp("2025-06-15T12:00:00Z").unwrap()
    }

    #[actix_web::test]
    async fn only_trends_valid_now_are_listed() {
        let repo = TestRepository::new();
        let generator = StubGenerator::replying(REPLY);

        let stored = generate_trends(now(), &repo, &generator).await.unwrap();
        assert_eq!(stored.len(), 2);
        assert!(generator.prompts()[0].contains("2025-06-15"));

        let current = list_trends(TrendListQuery::active_at(now()), &repo).unwrap();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].title.as_str(), "Butter yellow");
        assert!(current[0].is_valid_at(now()));

        let later = parse_timestamp("2025-09-01").unwrap();
        assert!(list_trends(TrendListQuery::active_at(later), &repo).unwrap().is_empty());
    }

    #[actix_web::test]
    async fn rate_limit_yields_no_trends() {
        let repo = TestRepository::new();
        let generator = StubGenerator::failing(GenerationError::RateLimited);

        assert_eq!(generate_trends(now(), &repo, &generator).await, Ok(Vec::new()));
    }

    #[actix_web::test]
    async fn deleted_trend_is_gone() {
        let repo = TestRepository::new();
        let generator = StubGenerator::replying(REPLY);
        let stored = generate_trends(now(), &repo, &generator).await.unwrap();

        delete_trend(stored[0].id.get(), &repo).unwrap();

        let current = list_trends(TrendListQuery::active_at(now()), &repo).unwrap();
        assert!(current.is_empty());
    }
}
