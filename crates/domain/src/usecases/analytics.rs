//! Local analytics - view and click counters kept in a key-value store

use std::sync::Arc;

use crate::{
    model::AnalyticsSnapshot,
    ports::{Clock, KeyValueStore, KvError},
};

/// Tracks profile views and link clicks for one store
pub struct AnalyticsTracker<K, C>
where
    K: KeyValueStore + ?Sized,
    C: Clock + ?Sized,
{
    store: Arc<K>,
    clock: Arc<C>,
}

impl<K, C> AnalyticsTracker<K, C>
where
    K: KeyValueStore + ?Sized,
    C: Clock + ?Sized,
{
    pub fn new(store: Arc<K>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Current counters for a profile (zeroes when nothing was tracked)
    pub async fn snapshot(&self, profile_id: &str) -> Result<AnalyticsSnapshot, KvError> {
        match self.store.get(&snapshot_key(profile_id)).await? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| KvError::Serialization(e.to_string()))
            }
            None => Ok(AnalyticsSnapshot::default()),
        }
    }

    /// Record a profile page view
    pub async fn track_view(&self, profile_id: &str) -> Result<AnalyticsSnapshot, KvError> {
        let today = self.today();
        let day_key = format!("lastView_{}", profile_id);
        let same_day = self.store.get(&day_key).await?.as_deref() == Some(today.as_str());

        let mut snapshot = self.snapshot(profile_id).await?;
        snapshot.total_views += 1;
        snapshot.views_today = if same_day { snapshot.views_today + 1 } else { 1 };

        self.save(profile_id, &snapshot).await?;
        self.store.set(&day_key, &today).await?;

        tracing::debug!(
            profile_id = %profile_id,
            total_views = snapshot.total_views,
            "Tracked view"
        );

        Ok(snapshot)
    }

    /// Record a click on the link with the given label
    pub async fn track_click(
        &self,
        profile_id: &str,
        link_label: &str,
    ) -> Result<AnalyticsSnapshot, KvError> {
        let today = self.today();
        let day_key = format!("lastClick_{}", profile_id);
        let same_day = self.store.get(&day_key).await?.as_deref() == Some(today.as_str());

        let mut snapshot = self.snapshot(profile_id).await?;
        snapshot.total_clicks += 1;
        snapshot.clicks_today = if same_day {
            snapshot.clicks_today + 1
        } else {
            1
        };
        *snapshot
            .clicks_by_link
            .entry(link_label.to_string())
            .or_insert(0) += 1;

        self.save(profile_id, &snapshot).await?;
        self.store.set(&day_key, &today).await?;

        tracing::debug!(
            profile_id = %profile_id,
            link = %link_label,
            total_clicks = snapshot.total_clicks,
            "Tracked click"
        );

        Ok(snapshot)
    }

    async fn save(&self, profile_id: &str, snapshot: &AnalyticsSnapshot) -> Result<(), KvError> {
        let raw =
            serde_json::to_string(snapshot).map_err(|e| KvError::Serialization(e.to_string()))?;
        self.store.set(&snapshot_key(profile_id), &raw).await
    }

    fn today(&self) -> String {
        self.clock.now().date().to_string()
    }
}

fn snapshot_key(profile_id: &str) -> String {
    format!("analytics_{}", profile_id)
}

impl AnalyticsSnapshot {
    /// Clicks per view as a percentage, rounded to one decimal
    pub fn click_rate(&self) -> f64 {
        if self.total_views == 0 {
            return 0.0;
        }
        let rate = self.total_clicks as f64 / self.total_views as f64 * 100.0;
        (rate * 10.0).round() / 10.0
    }

    /// The link with the most clicks, if any were tracked
    pub fn most_clicked(&self) -> Option<(&str, u64)> {
        self.clicks_by_link
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(label, count)| (label.as_str(), *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use time::{OffsetDateTime, macros::datetime};

    #[derive(Default)]
    struct FakeStore {
        values: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KeyValueStore for FakeStore {
        async fn get(&self, key: &str) -> Result<Option<String>, KvError> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), KvError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<(), KvError> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct FakeClock {
        time: Mutex<OffsetDateTime>,
    }

    impl FakeClock {
        fn at(time: OffsetDateTime) -> Self {
            Self {
                time: Mutex::new(time),
            }
        }

        fn set(&self, time: OffsetDateTime) {
            *self.time.lock().unwrap() = time;
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> OffsetDateTime {
            *self.time.lock().unwrap()
        }
    }

    #[tokio::test]
    async fn test_views_accumulate_within_a_day() {
        let store = Arc::new(FakeStore::default());
        let clock = Arc::new(FakeClock::at(datetime!(2026-03-01 09:00 UTC)));
        let tracker = AnalyticsTracker::new(store, clock);

        tracker.track_view("0xabc").await.unwrap();
        let snapshot = tracker.track_view("0xabc").await.unwrap();

        assert_eq!(snapshot.total_views, 2);
        assert_eq!(snapshot.views_today, 2);
    }

    #[tokio::test]
    async fn test_daily_counters_reset_on_new_day() {
        let store = Arc::new(FakeStore::default());
        let clock = Arc::new(FakeClock::at(datetime!(2026-03-01 23:00 UTC)));
        let tracker = AnalyticsTracker::new(store, Arc::clone(&clock));

        tracker.track_view("0xabc").await.unwrap();
        tracker.track_click("0xabc", "Blog").await.unwrap();
        tracker.track_click("0xabc", "Blog").await.unwrap();

        clock.set(datetime!(2026-03-02 08:00 UTC));
        let snapshot = tracker.track_view("0xabc").await.unwrap();
        assert_eq!(snapshot.total_views, 2);
        assert_eq!(snapshot.views_today, 1);

        let snapshot = tracker.track_click("0xabc", "Shop").await.unwrap();
        assert_eq!(snapshot.total_clicks, 3);
        assert_eq!(snapshot.clicks_today, 1);
        assert_eq!(snapshot.clicks_by_link.get("Blog"), Some(&2));
    }

    #[tokio::test]
    async fn test_stored_keys_match_browser_layout() {
        let store = Arc::new(FakeStore::default());
        let clock = Arc::new(FakeClock::at(datetime!(2026-03-01 09:00 UTC)));
        let tracker = AnalyticsTracker::new(Arc::clone(&store), clock);

        tracker.track_view("0xabc").await.unwrap();
        tracker.track_click("0xabc", "Blog").await.unwrap();

        assert_eq!(
            store.get("lastView_0xabc").await.unwrap().as_deref(),
            Some("2026-03-01")
        );
        assert_eq!(
            store.get("lastClick_0xabc").await.unwrap().as_deref(),
            Some("2026-03-01")
        );
        assert!(store.get("analytics_0xabc").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_profiles_are_tracked_separately() {
        let store = Arc::new(FakeStore::default());
        let clock = Arc::new(FakeClock::at(datetime!(2026-03-01 09:00 UTC)));
        let tracker = AnalyticsTracker::new(store, clock);

        tracker.track_view("0xaaa").await.unwrap();
        assert_eq!(tracker.snapshot("0xbbb").await.unwrap(), AnalyticsSnapshot::default());
    }

    #[test]
    fn test_click_rate_and_most_clicked() {
        let mut snapshot = AnalyticsSnapshot::default();
        assert_eq!(snapshot.click_rate(), 0.0);
        assert_eq!(snapshot.most_clicked(), None);

        snapshot.total_views = 3;
        snapshot.total_clicks = 1;
        snapshot.clicks_by_link.insert("Blog".to_string(), 1);
        snapshot.clicks_by_link.insert("Shop".to_string(), 4);

        assert_eq!(snapshot.click_rate(), 33.3);
        assert_eq!(snapshot.most_clicked(), Some(("Shop", 4)));
    }
}
