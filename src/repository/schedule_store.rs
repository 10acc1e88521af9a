// ==========================================
// 门诊诊室排班系统 - 排班数据仓储
// ==========================================
// 职责: 排班/休假记录的懒加载缓存 + 显式失效
// 生命周期: 首次访问加载 → 进程内缓存 → invalidate 后下次访问重新加载
// 并发: 加载在缓存锁内完成，调用方只会看到旧快照或完整的新快照
// ==========================================

use crate::domain::assignment::{AssignmentRecord, LeaveRecord, ScheduleSnapshot};
use crate::domain::types::room_ids;
use crate::repository::error::StoreResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

// ==========================================
// ScheduleLoader Trait
// ==========================================
// 用途: 缓存未命中时加载完整快照
// 实现者: WorkbookScheduleLoader
#[async_trait]
pub trait ScheduleLoader: Send + Sync {
    async fn load(&self) -> StoreResult<ScheduleSnapshot>;
}

// ==========================================
// ScheduleStore - 排班数据仓储
// ==========================================
pub struct ScheduleStore {
    loader: Arc<dyn ScheduleLoader>,
    rooms: Vec<String>,
    cache: Mutex<Option<Arc<ScheduleSnapshot>>>,
}

impl ScheduleStore {
    /// # 参数
    /// - loader: 数据加载器
    /// - room_count: 诊室数量（OPD-1 .. OPD-N）
    pub fn new(loader: Arc<dyn ScheduleLoader>, room_count: u32) -> Self {
        Self {
            loader,
            rooms: room_ids(room_count),
            cache: Mutex::new(None),
        }
    }

    /// 当前快照（缓存未命中时加载）
    ///
    /// 加载失败时缓存保持为空，错误原样返回
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> StoreResult<Arc<ScheduleSnapshot>> {
        let mut cache = self.cache.lock().await;
        if let Some(snapshot) = cache.as_ref() {
            return Ok(Arc::clone(snapshot));
        }
        self.load_into(&mut cache).await
    }

    /// 排班记录（数据源原始顺序）
    pub async fn assignments(&self) -> StoreResult<Vec<AssignmentRecord>> {
        Ok(self.snapshot().await?.assignments.clone())
    }

    /// 休假记录（数据源原始顺序）
    pub async fn leaves(&self) -> StoreResult<Vec<LeaveRecord>> {
        Ok(self.snapshot().await?.leaves.clone())
    }

    /// 固定诊室列表
    pub fn rooms(&self) -> &[String] {
        &self.rooms
    }

    /// 科室列表（去重，首次出现顺序）
    pub async fn departments(&self) -> StoreResult<Vec<String>> {
        Ok(self.snapshot().await?.departments())
    }

    /// 人员列表（去重，首次出现顺序）
    pub async fn people(&self) -> StoreResult<Vec<String>> {
        Ok(self.snapshot().await?.people())
    }

    /// 清空缓存，下次访问重新加载
    pub async fn invalidate(&self) {
        let mut cache = self.cache.lock().await;
        if cache.take().is_some() {
            info!("排班数据缓存已失效");
        }
    }

    /// 失效并立即重新加载（同一把锁内完成）
    ///
    /// 加载失败时缓存为空，下次访问重新尝试
    #[instrument(skip(self))]
    pub async fn reload(&self) -> StoreResult<Arc<ScheduleSnapshot>> {
        let mut cache = self.cache.lock().await;
        if cache.take().is_some() {
            info!("排班数据缓存已失效");
        }
        self.load_into(&mut cache).await
    }

    /// 缓存是否已加载
    pub async fn is_loaded(&self) -> bool {
        self.cache.lock().await.is_some()
    }

    /// 调用加载器并写入缓存（调用方持有缓存锁）
    async fn load_into(
        &self,
        cache: &mut Option<Arc<ScheduleSnapshot>>,
    ) -> StoreResult<Arc<ScheduleSnapshot>> {
        let snapshot = Arc::new(self.loader.load().await?);
        info!(
            assignments = snapshot.assignments.len(),
            leaves = snapshot.leaves.len(),
            "排班数据加载完成"
        );
        *cache = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::error::FetchError;
    use crate::repository::error::StoreError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingLoader {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl ScheduleLoader for CountingLoader {
        async fn load(&self) -> StoreResult<ScheduleSnapshot> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(StoreError::Fetch(FetchError::Status {
                    url: "http://example.invalid".to_string(),
                    status: 503,
                }));
            }
            Ok(ScheduleSnapshot::new(vec![], vec![]))
        }
    }

    fn store(fail: bool) -> (Arc<CountingLoader>, ScheduleStore) {
        let loader = Arc::new(CountingLoader {
            calls: AtomicUsize::new(0),
            fail,
        });
        let store = ScheduleStore::new(loader.clone(), 15);
        (loader, store)
    }

    #[tokio::test]
    async fn test_lazy_load_and_cache() {
        let (loader, store) = store(false);
        assert!(!store.is_loaded().await);

        store.assignments().await.unwrap();
        store.leaves().await.unwrap();
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
        assert!(store.is_loaded().await);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let (loader, store) = store(false);
        store.snapshot().await.unwrap();
        store.invalidate().await;
        assert!(!store.is_loaded().await);

        store.snapshot().await.unwrap();
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates_and_cache_stays_empty() {
        let (loader, store) = store(true);
        let err = store.snapshot().await.unwrap_err();
        assert!(err.is_fetch_error());
        assert!(!store.is_loaded().await);

        // 下次访问继续尝试加载
        let _ = store.snapshot().await;
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_reload_replaces_cached_snapshot() {
        let (loader, store) = store(false);
        let first = store.snapshot().await.unwrap();
        let reloaded = store.reload().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &reloaded));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);

        // 重新加载后的快照即为缓存
        let cached = store.snapshot().await.unwrap();
        assert!(Arc::ptr_eq(&reloaded, &cached));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_reload_leaves_cache_empty() {
        let (loader, store) = store(true);
        assert!(store.reload().await.is_err());
        assert!(!store.is_loaded().await);
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rooms_are_static() {
        let (_, store) = store(false);
        assert_eq!(store.rooms().len(), 15);
        assert_eq!(store.rooms()[0], "OPD-1");
    }
}
