//! 포트폴리오 요약 캐시.
//!
//! 호출자가 소유하는 명시적 메모이제이션입니다. 전역 상태가 없으므로
//! 요청 간에 결과가 섞이지 않습니다. 키는 `(스냅샷 지문, 평가일)`이고
//! 각 항목은 TTL이 지나면 만료됩니다.

use chrono::NaiveDate;
use estate_core::PortfolioSnapshot;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::portfolio::PortfolioSummary;

/// 기본 캐시 TTL (5분).
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// 캐시 키.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// 스냅샷 지문
    pub fingerprint: u64,
    /// 평가일
    pub now: NaiveDate,
}

impl CacheKey {
    pub fn new(snapshot: &PortfolioSnapshot, now: NaiveDate) -> Self {
        Self {
            fingerprint: snapshot.fingerprint(),
            now,
        }
    }
}

#[derive(Debug)]
struct CacheEntry {
    summary: PortfolioSummary,
    inserted_at: Instant,
}

/// 캐시 통계.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<CacheKey, CacheEntry>,
    hits: u64,
    misses: u64,
}

/// TTL 기반 요약 캐시.
#[derive(Debug)]
pub struct MetricsCache {
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl Default for MetricsCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl MetricsCache {
    /// 주어진 TTL로 빈 캐시를 생성합니다.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // 상태 갱신은 retain/insert 호출뿐이므로 poison이어도 내부 값은 일관됩니다.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 캐시된 요약을 반환하거나, 없거나 만료되었으면 계산해서 저장합니다.
    ///
    /// 새 항목을 저장할 때 만료된 항목을 함께 제거하므로 항목 수는 TTL 안에
    /// 사용된 키 개수를 넘지 않습니다.
    pub fn get_or_compute(
        &self,
        snapshot: &PortfolioSnapshot,
        now: NaiveDate,
    ) -> PortfolioSummary {
        let key = CacheKey::new(snapshot, now);

        {
            let mut state = self.lock();
            let fresh = state
                .entries
                .get(&key)
                .filter(|entry| entry.inserted_at.elapsed() < self.ttl)
                .map(|entry| entry.summary.clone());

            if let Some(summary) = fresh {
                state.hits += 1;
                debug!(fingerprint = key.fingerprint, now = %now, "Metrics cache hit");
                return summary;
            }
            state.misses += 1;
        }

        // 계산 중에는 락을 잡지 않습니다.
        let summary = PortfolioSummary::build(&snapshot.properties, now);
        debug!(fingerprint = key.fingerprint, now = %now, "Metrics cache miss");

        let ttl = self.ttl;
        let mut state = self.lock();
        state.entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);
        state.entries.insert(
            key,
            CacheEntry {
                summary: summary.clone(),
                inserted_at: Instant::now(),
            },
        );

        summary
    }

    /// 만료된 항목을 제거하고 제거한 개수를 반환합니다.
    pub fn purge_expired(&self) -> usize {
        let ttl = self.ttl;
        let mut state = self.lock();
        let before = state.entries.len();
        state.entries.retain(|_, entry| entry.inserted_at.elapsed() < ttl);
        before - state.entries.len()
    }

    /// 모든 항목을 제거합니다. 통계는 유지됩니다.
    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            entries: state.entries.len(),
        }
    }
}
