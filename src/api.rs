use chrono::{DateTime, Duration, Utc};
use gloo_net::http::Request;
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

use crate::config;

/// Everything the site shows comes from the admin backend as loosely-typed
/// key/value configuration plus a couple of typed lists. A missing key, a
/// failed fetch, and a malformed value all read the same way here: `None`,
/// and the caller renders its hardcoded default copy. Nothing is surfaced
/// to the visitor.

pub const MAINTENANCE_TTL_SECS: i64 = 30;
pub const CONFIG_TTL_SECS: i64 = 300;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub key: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub icon_color: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub order: f64,
}

/// Credential chips live inside the `about_credentials` config value.
/// Older entries predate the `isActive`/`order` fields, so absence means
/// active at order 0.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub gradient: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub order: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MaintenanceFlag {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MaintenanceCheck {
    #[serde(default)]
    pub maintenance: MaintenanceFlag,
}

struct CacheEntry {
    fetched_at: DateTime<Utc>,
    value: Value,
}

thread_local! {
    // One browser tab, one thread: a thread_local map is the whole cache.
    static QUERY_CACHE: RefCell<HashMap<String, CacheEntry>> = RefCell::new(HashMap::new());
}

fn cache_lookup(path: &str, ttl_secs: i64) -> Option<Value> {
    QUERY_CACHE.with(|cache| {
        let cache = cache.borrow();
        let entry = cache.get(path)?;
        if Utc::now() - entry.fetched_at < Duration::seconds(ttl_secs) {
            Some(entry.value.clone())
        } else {
            None
        }
    })
}

fn cache_store(path: &str, value: Value) {
    QUERY_CACHE.with(|cache| {
        cache.borrow_mut().insert(
            path.to_string(),
            CacheEntry {
                fetched_at: Utc::now(),
                value,
            },
        );
    });
}

/// GETs a JSON endpoint, reusing the last response while it is fresher
/// than `ttl_secs`. Transport and decode failures are logged and come
/// back as `None`.
pub async fn fetch_cached(path: &str, ttl_secs: i64) -> Option<Value> {
    if let Some(value) = cache_lookup(path, ttl_secs) {
        return Some(value);
    }
    let url = format!("{}{}", config::get_backend_url(), path);
    match Request::get(&url).send().await {
        Ok(response) => match response.json::<Value>().await {
            Ok(value) => {
                cache_store(path, value.clone());
                Some(value)
            }
            Err(e) => {
                warn!("bad JSON from {}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("fetch {} failed: {}", path, e);
            None
        }
    }
}

/// `true` only when the backend positively says maintenance is on.
pub async fn fetch_maintenance_enabled() -> bool {
    match fetch_cached("/api/maintenance-check", MAINTENANCE_TTL_SECS).await {
        Some(value) => serde_json::from_value::<MaintenanceCheck>(value)
            .map(|check| check.maintenance.enabled)
            .unwrap_or(false),
        None => false,
    }
}

pub async fn fetch_site_config() -> Vec<SiteConfig> {
    match fetch_cached("/api/admin/config", CONFIG_TTL_SECS).await {
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("unexpected site config shape: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    }
}

/// Specialties are small and change from the admin panel; no cache.
pub async fn fetch_specialties() -> Vec<Specialty> {
    let url = format!("{}/api/admin/specialties", config::get_backend_url());
    match Request::get(&url).send().await {
        Ok(response) => match response.json::<Vec<Specialty>>().await {
            Ok(specialties) => specialties,
            Err(e) => {
                warn!("bad specialties payload: {}", e);
                Vec::new()
            }
        },
        Err(e) => {
            warn!("fetch specialties failed: {}", e);
            Vec::new()
        }
    }
}

pub fn config_value<'a>(configs: &'a [SiteConfig], key: &str) -> Option<&'a Value> {
    configs.iter().find(|c| c.key == key).map(|c| &c.value)
}

/// String field inside an object-valued config entry, e.g.
/// `general_info.name`.
pub fn config_field_str(configs: &[SiteConfig], key: &str, field: &str) -> Option<String> {
    config_value(configs, key)?
        .get(field)?
        .as_str()
        .map(str::to_string)
}

pub fn credentials_from(configs: &[SiteConfig]) -> Vec<Credential> {
    config_value(configs, "about_credentials")
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

/// Chips the About panel actually shows: everything not explicitly
/// deactivated, ascending by order. Equal orders keep their incoming
/// position (the sort is stable, and callers rely on that).
pub fn active_credentials(credentials: &[Credential]) -> Vec<Credential> {
    let mut active: Vec<Credential> = credentials
        .iter()
        .filter(|c| c.is_active != Some(false))
        .cloned()
        .collect();
    active.sort_by(|a, b| {
        a.order
            .unwrap_or(0.0)
            .partial_cmp(&b.order.unwrap_or(0.0))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    active
}

/// Cards for the specialties panel: only `isActive` entries, ascending by
/// order, ties stable by fetch position.
pub fn active_specialties(specialties: &[Specialty]) -> Vec<Specialty> {
    let mut active: Vec<Specialty> = specialties
        .iter()
        .filter(|s| s.is_active)
        .cloned()
        .collect();
    active.sort_by(|a, b| {
        a.order
            .partial_cmp(&b.order)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn specialty(id: i64, order: f64, active: bool) -> Specialty {
        Specialty {
            id,
            title: format!("especialidade {}", id),
            description: String::new(),
            icon: "Brain".into(),
            icon_color: "#ec4899".into(),
            is_active: active,
            order,
        }
    }

    #[test]
    fn specialties_decode_from_camel_case() {
        let list: Vec<Specialty> = serde_json::from_value(json!([{
            "id": 1,
            "title": "Ansiedade",
            "description": "Técnicas para lidar com a ansiedade",
            "icon": "Leaf",
            "iconColor": "#10b981",
            "isActive": true,
            "order": 2
        }]))
        .unwrap();
        assert_eq!(list[0].icon_color, "#10b981");
        assert!(list[0].is_active);
        assert_eq!(list[0].order, 2.0);
    }

    #[test]
    fn inactive_specialties_never_render() {
        let list = vec![
            specialty(1, 0.0, true),
            specialty(2, 1.0, false),
            specialty(3, 2.0, true),
        ];
        let active = active_specialties(&list);
        assert_eq!(
            active.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn specialty_order_is_ascending_and_stable() {
        let list = vec![
            specialty(1, 2.0, true),
            specialty(2, 1.0, true),
            specialty(3, 1.0, true),
            specialty(4, 0.5, true),
        ];
        let ids: Vec<i64> = active_specialties(&list).iter().map(|s| s.id).collect();
        // Ties (2 and 3) keep fetch order; 1 sorts last on order 2.0.
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn credential_defaults_count_as_active_at_order_zero() {
        let credentials: Vec<Credential> = serde_json::from_value(json!([
            { "title": "sem campos extras" },
            { "title": "desativada", "isActive": false },
            { "title": "primeira", "order": -1 }
        ]))
        .unwrap();
        let active = active_credentials(&credentials);
        assert_eq!(active.len(), 2);
        assert_eq!(active[0].title, "primeira");
        assert_eq!(active[1].title, "sem campos extras");
    }

    #[test]
    fn config_lookup_falls_through_missing_keys_and_fields() {
        let configs = vec![SiteConfig {
            key: "general_info".into(),
            value: json!({ "name": "Dra. Adrielle Benhossi", "crp": "08/123456" }),
        }];
        assert_eq!(
            config_field_str(&configs, "general_info", "crp").as_deref(),
            Some("08/123456")
        );
        assert_eq!(config_field_str(&configs, "general_info", "missing"), None);
        assert_eq!(config_field_str(&configs, "absent_key", "name"), None);
    }

    #[test]
    fn maintenance_payload_defaults_to_disabled() {
        let check: MaintenanceCheck = serde_json::from_value(json!({})).unwrap();
        assert!(!check.maintenance.enabled);
        let check: MaintenanceCheck =
            serde_json::from_value(json!({ "maintenance": { "enabled": true } })).unwrap();
        assert!(check.maintenance.enabled);
    }
}
