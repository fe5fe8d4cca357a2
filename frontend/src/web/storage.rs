//! localStorage 适配
//!
//! 会话字段按原始字符串存取（令牌、角色都不是 JSON），
//! 所以这里走 `gloo_storage::LocalStorage::raw()`，不经过它的 JSON 编解码。

use career_saarthi::KeyValueStore;
use gloo_storage::Storage;

/// 浏览器本地存储
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> web_sys::Storage {
        gloo_storage::LocalStorage::raw()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        match Self::storage().set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("localStorage.setItem({key}) failed: {e:?}");
                false
            }
        }
    }

    fn remove(&self, key: &str) -> bool {
        Self::storage().remove_item(key).is_ok()
    }
}
