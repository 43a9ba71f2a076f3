//! End-to-end pipeline tests over a stub renderer.

use std::fs;
use std::sync::Mutex;

use serde_json::{Value, json};
use siderea::ChartService;
use siderea::render::{Result as RenderResult, WheelJob, WheelRenderer};

/// Stub standing in for the external wheel renderer: records every job it
/// receives and writes a fixed artifact (or nothing) into the output
/// directory.
struct StubRenderer {
    artifact: Option<&'static str>,
    jobs: Mutex<Vec<Value>>,
}

impl StubRenderer {
    fn with_artifact(artifact: &'static str) -> Self {
        Self {
            artifact: Some(artifact),
            jobs: Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self {
            artifact: None,
            jobs: Mutex::new(Vec::new()),
        }
    }
}

impl WheelRenderer for StubRenderer {
    fn render_wheel(&self, job: &WheelJob<'_>) -> RenderResult<()> {
        self.jobs
            .lock()
            .unwrap()
            .push(serde_json::to_value(job).unwrap());
        if let Some(artifact) = self.artifact {
            fs::write(job.output_directory.join("wheel.svg"), artifact).unwrap();
        }
        Ok(())
    }
}

const PLAIN_WHEEL: &str = r#"<svg width="800" height="800"><circle r="300"/></svg>"#;

const WHEEL_WITH_HOUSES: &str = "<svg width=\"800\" height=\"800\">\n\
<line x1=\"0\" y1=\"0\" x2=\"5\" y2=\"5\" stroke-width=\"1\"/>\n\
<text x=\"1\" y=\"1\">7</text>\n\
<circle r=\"300\"/>\n\
</svg>";

fn service(renderer: StubRenderer) -> (ChartService, std::sync::Arc<Mutex<Vec<Value>>>) {
    // Share the job log across the boxed renderer boundary.
    struct Shared {
        inner: StubRenderer,
        log: std::sync::Arc<Mutex<Vec<Value>>>,
    }
    impl WheelRenderer for Shared {
        fn render_wheel(&self, job: &WheelJob<'_>) -> RenderResult<()> {
            self.log
                .lock()
                .unwrap()
                .push(serde_json::to_value(job).unwrap());
            self.inner.render_wheel(job)
        }
    }
    let log = std::sync::Arc::new(Mutex::new(Vec::new()));
    let shared = Shared {
        inner: renderer,
        log: log.clone(),
    };
    (ChartService::new(shared), log)
}

#[test]
fn idol_record_without_time_renders_a_natal_chart() {
    let (service, log) = service(StubRenderer::with_artifact(PLAIN_WHEEL));
    let request = json!({
        "source_type": "idol",
        "birth_date": "1990-01-01",
        "birth_country": "United States",
    });

    let svg = service.try_generate(&request).unwrap();
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    assert!(svg.contains(r#"viewBox="0 0 800 800""#));

    let jobs = log.lock().unwrap();
    let subject = &jobs[0]["first_subject"];
    assert_eq!(subject["nation"], "US");
    assert_eq!(subject["hour"], 12);
    assert_eq!(subject["minute"], 0);
    assert!(jobs[0].get("chart_type").is_none(), "natal has no label");
    let points: Vec<String> =
        serde_json::from_value(jobs[0]["active_points"].clone()).unwrap();
    assert!(points.contains(&"Ascendant".to_string()));
}

#[test]
fn pure_transit_uses_greenwich_noon_and_no_houses() {
    let (service, log) = service(StubRenderer::with_artifact(PLAIN_WHEEL));
    let request = json!({
        "source_type": "chart",
        "is_transit": true,
        "name": "Daily Transits",
        "birth_date": "2024-06-01",
        "birth_time": "09:15",
        "birth_city": "Tokyo",
        "birth_country": "Japan",
        "user_preferences": { "houseSystem": "whole-sign" },
    });

    service.try_generate(&request).unwrap();

    let jobs = log.lock().unwrap();
    let subject = &jobs[0]["first_subject"];
    assert_eq!(subject["name"], "Daily Transits (Transit)");
    assert_eq!(subject["lat"], 51.5);
    assert_eq!(subject["lng"], 0.0);
    assert_eq!(subject["city"], "Greenwich");
    assert_eq!(subject["tz_str"], "UTC");
    assert_eq!(subject["hour"], 12);
    assert_eq!(subject["houses_list"], json!([]));
    assert_eq!(subject["cusps"], json!([]));
    let points: Vec<String> =
        serde_json::from_value(jobs[0]["active_points"].clone()).unwrap();
    assert!(!points.contains(&"Ascendant".to_string()));
    assert!(!points.contains(&"Medium_Coeli".to_string()));
}

#[test]
fn synastry_passes_both_subjects_with_the_label() {
    let (service, log) = service(StubRenderer::with_artifact(PLAIN_WHEEL));
    let request = json!({
        "source_type": "chart",
        "name": "Person A",
        "birth_date": "1990-01-01",
        "synastry_data": {
            "name": "Person B",
            "birth_date": "1992-02-02",
            "birth_city": "Paris",
            "birth_country": "France",
        },
    });

    service.try_generate(&request).unwrap();

    let jobs = log.lock().unwrap();
    assert_eq!(jobs[0]["chart_type"], "Synastry");
    assert_eq!(jobs[0]["first_subject"]["name"], "Person A");
    assert_eq!(jobs[0]["second_subject"]["name"], "Person B");
    assert_eq!(jobs[0]["second_subject"]["nation"], "FR");
    assert!(jobs[0]["second_subject"].get("houses_list").is_none());
}

#[test]
fn transit_named_second_payload_becomes_an_overlay() {
    let (service, log) = service(StubRenderer::with_artifact(WHEEL_WITH_HOUSES));
    let request = json!({
        "source_type": "chart",
        "name": "Person A",
        "birth_date": "1990-01-01",
        "synastry_data": {
            "name": "Transit 2024-06-01",
            "birth_date": "2024-06-01",
        },
    });

    let svg = service.try_generate(&request).unwrap();
    // Transit-bearing output goes through the house filter.
    assert!(!svg.contains("stroke-width=\"1\""));
    assert!(!svg.contains(">7<"));
    assert!(svg.contains("<circle"));

    let jobs = log.lock().unwrap();
    assert_eq!(jobs[0]["chart_type"], "Transit");
    // Only the transiting side loses its houses.
    assert!(jobs[0]["first_subject"].get("houses_list").is_none());
    assert_eq!(jobs[0]["second_subject"]["houses_list"], json!([]));
}

#[test]
fn natal_output_keeps_house_markup() {
    let (service, _log) = service(StubRenderer::with_artifact(WHEEL_WITH_HOUSES));
    let request = json!({
        "source_type": "idol",
        "birth_date": "1990-01-01",
    });
    let svg = service.try_generate(&request).unwrap();
    assert!(svg.contains("stroke-width=\"1\""));
    assert!(svg.contains(">7<"));
}

#[test]
fn malformed_birth_date_yields_the_fallback_diagram() {
    let (service, _log) = service(StubRenderer::with_artifact(PLAIN_WHEEL));
    let request = json!({
        "source_type": "idol",
        "birth_date": "not-a-date",
    });

    assert!(service.try_generate(&request).is_err());

    let svg = service.generate(&request);
    assert!(svg.contains("Chart Generation Error"));
    assert!(svg.contains("not-a-date"));
    assert!(svg.starts_with("<svg xmlns="));
}

#[test]
fn missing_artifact_yields_the_fallback_without_leaking_the_name() {
    let (service, _log) = service(StubRenderer::empty());
    let long_name = "N".repeat(120);
    let request = json!({
        "source_type": "idol",
        "name": long_name,
        "birth_date": "1990-01-01",
    });

    let svg = service.generate(&request);
    assert!(svg.contains("Chart Generation Error"));
    assert!(svg.contains("Renderer produced no SVG artifact"));
    assert!(
        !svg.contains(&"N".repeat(51)),
        "error text stays within the truncation limit"
    );
}

#[test]
fn non_object_payload_yields_the_fallback() {
    let (service, _log) = service(StubRenderer::with_artifact(PLAIN_WHEEL));
    let svg = service.generate(&json!("just a string"));
    assert!(svg.contains("Chart Generation Error"));
}

#[test]
fn mode_selection_is_stable_across_repeated_requests() {
    let (service, log) = service(StubRenderer::with_artifact(PLAIN_WHEEL));
    let request = json!({
        "source_type": "chart",
        "is_transit": true,
        "birth_date": "2024-06-01",
    });
    for _ in 0..3 {
        service.try_generate(&request).unwrap();
    }
    let jobs = log.lock().unwrap();
    assert_eq!(jobs.len(), 3);
    for job in jobs.iter() {
        assert_eq!(job["first_subject"]["city"], "Greenwich");
        assert!(job.get("chart_type").is_none());
    }
}
