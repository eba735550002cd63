use agency_valuation::assessment::domain::{AgencyType, ServiceSelection};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_agency_type(raw: &str) -> Result<AgencyType, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "full_service" | "full-service" => Ok(AgencyType::FullService),
        "creative" => Ok(AgencyType::Creative),
        "media_buying" | "media-buying" => Ok(AgencyType::MediaBuying),
        "performance_marketing" | "performance-marketing" => Ok(AgencyType::PerformanceMarketing),
        "public_relations" | "public-relations" | "pr" => Ok(AgencyType::PublicRelations),
        other => Err(format!(
            "unknown agency type '{other}'; expected full_service, creative, media_buying, performance_marketing, or public_relations"
        )),
    }
}

/// Parse a `service_id:revenue_percent` CLI argument, e.g. `seo_search:40`.
pub(crate) fn parse_service_selection(raw: &str) -> Result<ServiceSelection, String> {
    let (service_id, percent) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected service_id:revenue_percent, got '{raw}'"))?;

    let revenue_percent = percent
        .trim()
        .parse::<u8>()
        .map_err(|_| format!("revenue percent in '{raw}' must be an integer 0-100"))?;
    if revenue_percent > 100 {
        return Err(format!("revenue percent in '{raw}' must be at most 100"));
    }

    Ok(ServiceSelection {
        service_id: service_id.trim().to_string(),
        revenue_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_selection_parses_id_and_share() {
        let selection = parse_service_selection("seo_search:40").expect("parses");
        assert_eq!(selection.service_id, "seo_search");
        assert_eq!(selection.revenue_percent, 40);

        assert!(parse_service_selection("seo_search").is_err());
        assert!(parse_service_selection("seo_search:140").is_err());
        assert!(parse_service_selection("seo_search:many").is_err());
    }

    #[test]
    fn agency_type_accepts_kebab_and_snake_case() {
        assert_eq!(
            parse_agency_type("media-buying").expect("parses"),
            AgencyType::MediaBuying
        );
        assert_eq!(
            parse_agency_type("PR").expect("parses"),
            AgencyType::PublicRelations
        );
        assert!(parse_agency_type("holding_company").is_err());
    }
}
