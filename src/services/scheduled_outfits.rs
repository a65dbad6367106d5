use chrono::Utc;

use crate::domain::dates::DateRange;
use crate::domain::scheduled_outfit::ScheduledOutfit;
use crate::domain::types::ScheduledOutfitId;
use crate::forms::scheduled_outfits::ScheduleOutfitFormPayload;
use crate::repository::{OutfitReader, ScheduledOutfitReader, ScheduledOutfitWriter};

use super::{ServiceError, ServiceResult};

pub fn list_scheduled_outfits<R>(
    range: DateRange,
    repo: &R,
) -> ServiceResult<Vec<ScheduledOutfit>>
where
    R: ScheduledOutfitReader,
{
    repo.list_scheduled_outfits(range).map_err(|e| {
        log::error!("Failed to list scheduled outfits: {e}");
        ServiceError::Internal
    })
}

/// Put an existing outfit on the calendar.
pub fn schedule_outfit<R>(
    payload: ScheduleOutfitFormPayload,
    repo: &R,
) -> ServiceResult<ScheduledOutfit>
where
    R: OutfitReader + ScheduledOutfitWriter,
{
    match repo.get_outfit_by_id(payload.outfit_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get outfit: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let scheduled = payload.into_new_scheduled_outfit(Utc::now().naive_utc());
    repo.schedule_outfit(&scheduled).map_err(|e| {
        log::error!("Failed to schedule outfit: {e}");
        ServiceError::Internal
    })
}

/// Remove a calendar entry; unknown ids are a no-op.
pub fn unschedule_outfit<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ScheduledOutfitWriter,
{
    let Ok(id) = ScheduledOutfitId::new(id) else {
        return Ok(());
    };

    match repo.unschedule_outfit(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to unschedule outfit {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::outfit::NewOutfit;
    use crate::domain::types::{ClothingItemId, Occasion, OutfitId, ScheduleNotes, WeatherLabel};
    use crate::repository::OutfitWriter;
    use crate::repository::test::TestRepository;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn repo_with_outfit() -> (TestRepository, OutfitId) {
        let repo = TestRepository::new();
        let outfit = repo
            .create_outfit(&NewOutfit {
                items: vec![ClothingItemId::new(1).unwrap()],
                occasion: Occasion::new("work").unwrap(),
                weather: WeatherLabel::new("cloudy").unwrap(),
                created_at: Utc::now().naive_utc(),
            })
            .unwrap();
        (repo, outfit.id)
    }

    fn payload(outfit_id: OutfitId, day: u32) -> ScheduleOutfitFormPayload {
        ScheduleOutfitFormPayload {
            outfit_id,
            date: date(day),
            notes: Some(ScheduleNotes::new("Team offsite").unwrap()),
        }
    }

    #[test]
    fn range_query_is_inclusive() {
        let (repo, outfit_id) = repo_with_outfit();
        for day in [1, 15, 31] {
            schedule_outfit(payload(outfit_id, day), &repo).unwrap();
        }

        let range = DateRange::new(date(1), date(15)).unwrap();
        let days: Vec<_> = list_scheduled_outfits(range, &repo)
            .unwrap()
            .into_iter()
            .map(|s| s.date)
            .collect();
        assert_eq!(days, vec![date(1), date(15)]);
    }

    #[test]
    fn scheduling_missing_outfit_is_not_found() {
        let (repo, _) = repo_with_outfit();
        let missing = OutfitId::new(999).unwrap();
        assert_eq!(
            schedule_outfit(payload(missing, 3), &repo),
            Err(ServiceError::NotFound)
        );
    }

    #[test]
    fn unscheduled_entry_is_gone() {
        let (repo, outfit_id) = repo_with_outfit();
        let scheduled = schedule_outfit(payload(outfit_id, 5), &repo).unwrap();
        unschedule_outfit(scheduled.id.get(), &repo).unwrap();

        let range = DateRange::new(date(1), date(31)).unwrap();
        assert!(list_scheduled_outfits(range, &repo).unwrap().is_empty());
    }
}
