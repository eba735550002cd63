use std::collections::HashMap;
use std::sync::OnceLock;

static QUESTION_ID_MAP: OnceLock<HashMap<String, &'static str>> = OnceLock::new();

/// Resolve an export's question identifier to a catalog id. Accepts the
/// catalog ids themselves plus the numbered ids older survey exports used.
pub(crate) fn catalog_id_for(raw: &str) -> Option<&'static str> {
    question_id_map().get(&normalize_id(raw)).copied()
}

pub(crate) fn normalize_id(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}')
        .trim()
        .to_ascii_lowercase()
        .replace('-', "_")
}

fn question_id_map() -> &'static HashMap<String, &'static str> {
    QUESTION_ID_MAP.get_or_init(|| {
        const ALIAS_TO_ID: &[(&str, &str)] = &[
            // Operational
            ("ops_q1", "ops_process_documentation"),
            ("ops_q2", "ops_delivery_consistency"),
            ("ops_q3", "ops_founder_dependency"),
            ("ops_q4", "ops_utilization_tracking"),
            ("ops_q5", "ops_tooling_integration"),
            // Financial
            ("fin_q1", "fin_recurring_revenue"),
            ("fin_q2", "fin_client_concentration"),
            ("fin_q3", "fin_margin_visibility"),
            ("fin_q4", "fin_pricing_model"),
            ("fin_q5", "fin_forecast_discipline"),
            // AI readiness
            ("ai_q1", "ai_tool_adoption"),
            ("ai_q2", "ai_strategy_ownership"),
            ("ai_q3", "ai_team_capability"),
            ("ai_q4", "ai_data_readiness"),
            ("ai_q5", "ai_service_repositioning"),
            // Service-specific
            ("content_q1", "svc_content_ai_workflow"),
            ("content_q2", "svc_content_offer_shift"),
            ("paid_q1", "svc_paid_media_automation"),
            ("paid_q2", "svc_paid_media_value"),
            ("seo_q1", "svc_seo_ai_search"),
            ("seo_q2", "svc_seo_offer_evolution"),
        ];

        const CATALOG_IDS: &[&str] = &[
            "ops_process_documentation",
            "ops_delivery_consistency",
            "ops_founder_dependency",
            "ops_utilization_tracking",
            "ops_tooling_integration",
            "fin_recurring_revenue",
            "fin_client_concentration",
            "fin_margin_visibility",
            "fin_pricing_model",
            "fin_forecast_discipline",
            "ai_tool_adoption",
            "ai_strategy_ownership",
            "ai_team_capability",
            "ai_data_readiness",
            "ai_service_repositioning",
            "svc_content_ai_workflow",
            "svc_content_offer_shift",
            "svc_paid_media_automation",
            "svc_paid_media_value",
            "svc_seo_ai_search",
            "svc_seo_offer_evolution",
        ];

        let mut map = HashMap::new();
        for (alias, id) in ALIAS_TO_ID {
            map.insert(normalize_id(alias), *id);
        }
        for id in CATALOG_IDS {
            map.insert(normalize_id(id), *id);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(raw: &str) -> Option<&'static str> {
    catalog_id_for(raw)
}
