use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, PgPool};

use crate::dto::analytics_dto::{AnalyticsResponse, AnalyticsStats, PageStat, PopularJob};
use crate::dto::dashboard_dto::{
    DashboardResponse, DashboardStats, DeviceShare, RecentApplication, TrafficSource,
};
use crate::error::Result;
use crate::models::analytics::{AnalyticsSnapshot, PageViewStat};
use crate::utils::time::{format_duration, relative_time};

/// Traffic-source percentages averaged over a window of snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceMix {
    pub direct: f64,
    pub google: f64,
    pub social: f64,
    pub referral: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceMix {
    pub desktop: f64,
    pub mobile: f64,
    pub tablet: f64,
}

// Placeholder figures shown until the external collector has written
// any snapshots. The two panels deliberately use different numbers so a
// misconfigured collector is visible at a glance.
const DASHBOARD_FALLBACK_VISITORS: i64 = 1234;
const DASHBOARD_FALLBACK_PAGE_VIEWS: i64 = 5678;
const DASHBOARD_FALLBACK_SOURCES: SourceMix = SourceMix {
    direct: 45.0,
    google: 30.0,
    social: 15.0,
    referral: 10.0,
};
const DASHBOARD_FALLBACK_DEVICES: DeviceMix = DeviceMix {
    desktop: 58.0,
    mobile: 32.0,
    tablet: 10.0,
};
const ANALYTICS_FALLBACK_SOURCES: SourceMix = SourceMix {
    direct: 42.0,
    google: 31.0,
    social: 18.0,
    referral: 9.0,
};
const ANALYTICS_FALLBACK_DEVICES: DeviceMix = DeviceMix {
    desktop: 55.0,
    mobile: 35.0,
    tablet: 10.0,
};

const SNAPSHOT_COLUMNS: &str = "id, snapshot_date, visitors, page_views, bounce_rate, \
     avg_duration_seconds, source_direct, source_google, source_social, source_referral, \
     device_desktop, device_mobile, device_tablet";

#[derive(Debug, FromRow)]
struct RecentApplicationRow {
    id: i32,
    name: String,
    position: Option<String>,
    applied_at: Option<DateTime<Utc>>,
    status: String,
}

#[derive(Debug, FromRow)]
struct JobApplicationCount {
    title: String,
    applications: i64,
}

#[derive(Clone)]
pub struct AnalyticsService {
    pool: PgPool,
}

impl AnalyticsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Admin landing page: headline counts, the four latest applications and
    /// a seven day traffic summary.
    pub async fn dashboard(&self) -> Result<DashboardResponse> {
        let total_applications = self.count_applications().await?;
        let active_jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE is_active = TRUE")
            .fetch_one(&self.pool)
            .await?;

        let cutoff = Utc::now() - Duration::days(7);
        let snapshots = self.snapshots_since(cutoff).await?;

        // A window whose visitor sum is zero is indistinguishable from an
        // idle collector, so it also gets the placeholder figures.
        let visitors_sum: i64 = snapshots.iter().map(|s| i64::from(s.visitors)).sum();
        let total_visitors = if visitors_sum == 0 {
            DASHBOARD_FALLBACK_VISITORS
        } else {
            visitors_sum
        };
        let page_views_sum: i64 = snapshots.iter().map(|s| i64::from(s.page_views)).sum();
        let total_page_views = if page_views_sum == 0 {
            DASHBOARD_FALLBACK_PAGE_VIEWS
        } else {
            page_views_sum
        };

        let now = Utc::now();
        let recent_applications = self
            .recent_applications(4)
            .await?
            .into_iter()
            .map(|row| RecentApplication {
                id: row.id,
                name: row.name,
                position: row.position.unwrap_or_else(|| "Unknown".to_string()),
                date: relative_time(row.applied_at.unwrap_or(now), now),
                status: row.status,
            })
            .collect();

        let sources = source_mix(&snapshots, DASHBOARD_FALLBACK_SOURCES);
        let devices = device_mix(&snapshots, DASHBOARD_FALLBACK_DEVICES);

        Ok(DashboardResponse {
            stats: DashboardStats {
                total_applications,
                active_jobs,
                total_visitors,
                total_page_views,
            },
            recent_applications,
            traffic_sources: traffic_rows(total_visitors, sources),
            devices: device_rows(devices),
        })
    }

    /// Thirty day analytics panel. Unlike the dashboard, real snapshots are
    /// trusted even when their sums are zero.
    pub async fn analytics(&self) -> Result<AnalyticsResponse> {
        let cutoff = Utc::now() - Duration::days(30);
        let snapshots = self.snapshots_since(cutoff).await?;
        let total_applications = self.count_applications().await?;

        let (visitors, page_views, avg_bounce, avg_duration, conversion_rate) =
            if snapshots.is_empty() {
                (8420, 31250, 34.5, 185, 2.8)
            } else {
                let n = snapshots.len() as i64;
                let visitors: i64 = snapshots.iter().map(|s| i64::from(s.visitors)).sum();
                let page_views: i64 = snapshots.iter().map(|s| i64::from(s.page_views)).sum();
                let avg_bounce =
                    snapshots.iter().map(|s| s.bounce_rate).sum::<f64>() / n as f64;
                let avg_duration = snapshots
                    .iter()
                    .map(|s| i64::from(s.avg_duration_seconds))
                    .sum::<i64>()
                    / n;
                let conversion_rate = if visitors > 0 {
                    total_applications as f64 / visitors as f64 * 100.0
                } else {
                    0.0
                };
                (visitors, page_views, avg_bounce, avg_duration, conversion_rate)
            };

        let stats = AnalyticsStats {
            visitors,
            page_views,
            bounce_rate: format!("{avg_bounce:.1}%"),
            avg_duration: format_duration(avg_duration),
            applications: total_applications,
            conversion_rate: format!("{conversion_rate:.1}%"),
        };

        let sources = source_mix(&snapshots, ANALYTICS_FALLBACK_SOURCES);
        let devices = device_mix(&snapshots, ANALYTICS_FALLBACK_DEVICES);

        let page_rows = self.top_pages_since(cutoff, 5).await?;
        let top_pages = if page_rows.is_empty() {
            fallback_top_pages()
        } else {
            page_rows.into_iter().map(page_stat).collect()
        };

        let job_rows = self.jobs_by_recency(5).await?;
        let popular_jobs = if job_rows.is_empty() {
            fallback_popular_jobs()
        } else {
            job_rows
                .into_iter()
                .map(|row| PopularJob {
                    title: row.title,
                    applications: row.applications,
                    views: 0,
                })
                .collect()
        };

        Ok(AnalyticsResponse {
            stats,
            traffic_sources: traffic_rows(visitors, sources),
            devices: device_rows(devices),
            top_pages,
            popular_jobs,
        })
    }

    async fn count_applications(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn snapshots_since(&self, cutoff: DateTime<Utc>) -> Result<Vec<AnalyticsSnapshot>> {
        let query = format!(
            "SELECT {SNAPSHOT_COLUMNS} FROM analytics_snapshots
             WHERE snapshot_date >= $1 ORDER BY snapshot_date DESC"
        );
        let snapshots = sqlx::query_as::<_, AnalyticsSnapshot>(&query)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await?;
        Ok(snapshots)
    }

    async fn recent_applications(&self, limit: i64) -> Result<Vec<RecentApplicationRow>> {
        let rows = sqlx::query_as::<_, RecentApplicationRow>(
            "SELECT a.id, a.name, j.title AS position, a.applied_at, a.status
             FROM applications a LEFT JOIN jobs j ON j.id = a.job_id
             ORDER BY a.applied_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn top_pages_since(
        &self,
        cutoff: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<PageViewStat>> {
        let rows = sqlx::query_as::<_, PageViewStat>(
            "SELECT id, page_path, snapshot_date, views, unique_visitors, avg_time_seconds, bounce_rate
             FROM page_views WHERE snapshot_date >= $1
             ORDER BY views DESC LIMIT $2",
        )
        .bind(cutoff)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn jobs_by_recency(&self, limit: i64) -> Result<Vec<JobApplicationCount>> {
        let rows = sqlx::query_as::<_, JobApplicationCount>(
            "SELECT j.title,
                    (SELECT COUNT(*) FROM applications a WHERE a.job_id = j.id) AS applications
             FROM jobs j ORDER BY j.created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Average source percentages; the fallback kicks in only when the window is
/// empty, so genuine all-zero rows pass through unchanged.
fn source_mix(snapshots: &[AnalyticsSnapshot], fallback: SourceMix) -> SourceMix {
    if snapshots.is_empty() {
        return fallback;
    }
    let n = snapshots.len() as f64;
    SourceMix {
        direct: snapshots.iter().map(|s| s.source_direct).sum::<f64>() / n,
        google: snapshots.iter().map(|s| s.source_google).sum::<f64>() / n,
        social: snapshots.iter().map(|s| s.source_social).sum::<f64>() / n,
        referral: snapshots.iter().map(|s| s.source_referral).sum::<f64>() / n,
    }
}

fn device_mix(snapshots: &[AnalyticsSnapshot], fallback: DeviceMix) -> DeviceMix {
    if snapshots.is_empty() {
        return fallback;
    }
    let n = snapshots.len() as f64;
    DeviceMix {
        desktop: snapshots.iter().map(|s| s.device_desktop).sum::<f64>() / n,
        mobile: snapshots.iter().map(|s| s.device_mobile).sum::<f64>() / n,
        tablet: snapshots.iter().map(|s| s.device_tablet).sum::<f64>() / n,
    }
}

fn traffic_rows(total_visitors: i64, mix: SourceMix) -> Vec<TrafficSource> {
    let labelled = [
        ("Direct", mix.direct),
        ("Google Search", mix.google),
        ("Social Media", mix.social),
        ("Referral", mix.referral),
    ];
    labelled
        .into_iter()
        .map(|(source, share)| TrafficSource {
            source: source.to_string(),
            visitors: (total_visitors as f64 * share / 100.0) as i64,
            percentage: round1(share),
        })
        .collect()
}

fn device_rows(mix: DeviceMix) -> Vec<DeviceShare> {
    [
        ("Desktop", mix.desktop),
        ("Mobile", mix.mobile),
        ("Tablet", mix.tablet),
    ]
    .into_iter()
    .map(|(name, share)| DeviceShare {
        name: name.to_string(),
        percentage: round1(share),
    })
    .collect()
}

fn page_stat(row: PageViewStat) -> PageStat {
    PageStat {
        page: row.page_path,
        views: i64::from(row.views),
        unique_visitors: i64::from(row.unique_visitors),
        avg_time: format_duration(i64::from(row.avg_time_seconds)),
        bounce_rate: format!("{:.1}%", row.bounce_rate),
    }
}

fn fallback_top_pages() -> Vec<PageStat> {
    [
        ("/", 12400, 8200, "2m 15s", "28.3%"),
        ("/jobs", 8900, 6100, "3m 42s", "22.1%"),
        ("/jobs/detail", 5200, 4800, "4m 10s", "18.7%"),
        ("/about", 3100, 2900, "1m 55s", "45.2%"),
        ("/contact", 2800, 2600, "1m 30s", "52.0%"),
    ]
    .into_iter()
    .map(|(page, views, unique_visitors, avg_time, bounce_rate)| PageStat {
        page: page.to_string(),
        views,
        unique_visitors,
        avg_time: avg_time.to_string(),
        bounce_rate: bounce_rate.to_string(),
    })
    .collect()
}

fn fallback_popular_jobs() -> Vec<PopularJob> {
    [
        ("Home Care Assistant", 24, 1200),
        ("Senior Carer", 18, 980),
        ("Live-in Carer", 15, 850),
        ("Dementia Specialist", 12, 720),
        ("Night Shift Carer", 9, 540),
    ]
    .into_iter()
    .map(|(title, applications, views)| PopularJob {
        title: title.to_string(),
        applications,
        views,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(sources: [f64; 4], devices: [f64; 3]) -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            id: 0,
            snapshot_date: Utc::now(),
            visitors: 100,
            page_views: 250,
            bounce_rate: 30.0,
            avg_duration_seconds: 120,
            source_direct: sources[0],
            source_google: sources[1],
            source_social: sources[2],
            source_referral: sources[3],
            device_desktop: devices[0],
            device_mobile: devices[1],
            device_tablet: devices[2],
        }
    }

    #[test]
    fn empty_window_uses_fallback_mix() {
        let mix = source_mix(&[], DASHBOARD_FALLBACK_SOURCES);
        assert_eq!(mix, DASHBOARD_FALLBACK_SOURCES);
        let devices = device_mix(&[], ANALYTICS_FALLBACK_DEVICES);
        assert_eq!(devices, ANALYTICS_FALLBACK_DEVICES);
    }

    #[test]
    fn zero_valued_snapshots_are_not_replaced() {
        let snapshots = vec![snapshot([0.0; 4], [0.0; 3])];
        let mix = source_mix(&snapshots, DASHBOARD_FALLBACK_SOURCES);
        assert_eq!(mix.direct, 0.0);
        assert_eq!(mix.referral, 0.0);
    }

    #[test]
    fn mixes_average_over_the_window() {
        let snapshots = vec![
            snapshot([40.0, 30.0, 20.0, 10.0], [60.0, 30.0, 10.0]),
            snapshot([60.0, 20.0, 10.0, 10.0], [50.0, 40.0, 10.0]),
        ];
        let sources = source_mix(&snapshots, DASHBOARD_FALLBACK_SOURCES);
        assert_eq!(sources.direct, 50.0);
        assert_eq!(sources.google, 25.0);
        let devices = device_mix(&snapshots, DASHBOARD_FALLBACK_DEVICES);
        assert_eq!(devices.desktop, 55.0);
        assert_eq!(devices.mobile, 35.0);
    }

    #[test]
    fn traffic_rows_truncate_visitor_counts() {
        let rows = traffic_rows(
            1000,
            SourceMix {
                direct: 45.5,
                google: 30.0,
                social: 15.0,
                referral: 9.5,
            },
        );
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].source, "Direct");
        assert_eq!(rows[0].visitors, 455);
        assert_eq!(rows[0].percentage, 45.5);
        assert_eq!(rows[3].source, "Referral");
        assert_eq!(rows[3].visitors, 95);
    }

    #[test]
    fn percentages_round_to_one_decimal() {
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(66.666), 66.7);
        let rows = device_rows(DeviceMix {
            desktop: 58.33,
            mobile: 31.67,
            tablet: 10.0,
        });
        assert_eq!(rows[0].name, "Desktop");
        assert_eq!(rows[0].percentage, 58.3);
        assert_eq!(rows[1].percentage, 31.7);
    }

    #[test]
    fn fallback_tables_have_five_rows() {
        let pages = fallback_top_pages();
        assert_eq!(pages.len(), 5);
        assert_eq!(pages[0].page, "/");
        assert_eq!(pages[0].avg_time, "2m 15s");
        let jobs = fallback_popular_jobs();
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs[0].title, "Home Care Assistant");
        assert_eq!(jobs[0].applications, 24);
    }
}
