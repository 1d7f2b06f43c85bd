use chrono::NaiveDate;
use lockdown_core::prelude::*;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

/// Canned answers for both services, recording every call.
#[derive(Default)]
struct StubSource {
    eyeballs: HashMap<String, Vec<EyeballEntry>>,
    hegemony: HashMap<Asn, Vec<HegemonyRecord>>,
    calls: RefCell<Vec<String>>,
}

impl StubSource {
    fn with_france() -> Self {
        let mut stub = StubSource::default();
        stub.eyeballs.insert(
            "FR".into(),
            vec![EyeballEntry::new(3215, ""), EyeballEntry::new(12322, "PROXAD")],
        );
        stub.hegemony.insert(
            3215,
            vec![
                hege(3215, 3215, 1.0, "ORANGE"),
                hege(3215, 5511, 0.7, "ORANGE"),
                hege(3215, 174, 0.005, "ORANGE"),
            ],
        );
        stub.hegemony.insert(12322, vec![hege(12322, 1299, 0.25, "")]);
        stub
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

fn hege(origin: Asn, asn: Asn, score: f64, origin_name: &str) -> HegemonyRecord {
    HegemonyRecord {
        asn,
        asn_name: Some(format!("NAME-{asn}")),
        hege: score,
        originasn: origin,
        originasn_name: Some(origin_name.to_string()),
    }
}

impl NetworkSource for StubSource {
    fn eyeball_networks(&self, cc: &str, top: usize) -> lockdown_core::Result<Vec<EyeballEntry>> {
        self.calls.borrow_mut().push(format!("eyeball {cc} {top}"));
        match self.eyeballs.get(cc) {
            Some(list) => Ok(list.iter().take(top).cloned().collect()),
            None => Err(LockdownError::Schema {
                service: "eyeball",
                detail: format!("no data for {cc}"),
            }),
        }
    }

    fn hegemony(&self, origin: Asn, date: NaiveDate) -> lockdown_core::Result<Vec<HegemonyRecord>> {
        self.calls.borrow_mut().push(format!("hegemony {origin} {date}"));
        Ok(self.hegemony.get(&origin).cloned().unwrap_or_default())
    }
}

const INPUT: &str = "\
# Country\tStart\tEnd\tLevel
France\t2020-03-17[4]\t2020-05-11[5]\tNational
India Kerala 2020-03-23 2020-04-14 Regional
Atlantis 2020-03-23 2020-04-14 National
n/a
";

fn run(stub: &StubSource, config: PipelineConfig) -> Report {
    let db = CountryDb::bundled().unwrap();
    Pipeline::new(db, stub, config).run(INPUT.lines()).unwrap()
}

#[test]
fn france_record_end_to_end() {
    let stub = StubSource::with_france();
    let report = run(&stub, PipelineConfig::default());

    assert_eq!(report.records.len(), 1);
    let fr = &report.records["France"];
    assert_eq!(fr.cc, "FR");
    assert_eq!(fr.continent, "Europe");
    assert_eq!(fr.end.as_deref(), Some("2020-05-11"));

    let orange = &fr.eyeball[0];
    assert_eq!(orange.name, "ORANGE");
    let deps: Vec<(Asn, f64)> = orange.dependency.iter().map(|d| (d.asn, d.hege)).collect();
    assert_eq!(deps, vec![(5511, 0.7)]);

    // Blank origin names leave the service name in place.
    assert_eq!(fr.eyeball[1].name, "PROXAD");
    assert_eq!(fr.eyeball[1].dependency[0].asn, 1299);
}

#[test]
fn skipped_lines_never_reach_the_network() {
    let stub = StubSource::with_france();
    let report = run(&stub, PipelineConfig::default());

    assert_eq!(
        stub.calls(),
        vec![
            "eyeball FR 10".to_string(),
            "hegemony 3215 2020-03-17".to_string(),
            "hegemony 12322 2020-03-17".to_string(),
        ]
    );

    let reasons: Vec<(usize, SkipReason)> = report
        .skipped
        .iter()
        .map(|s| (s.line_no, s.reason.clone()))
        .collect();
    assert_eq!(
        reasons,
        vec![
            (1, SkipReason::Comment),
            (
                3,
                SkipReason::Scope {
                    scope: "Regional".into()
                }
            ),
            (
                4,
                SkipReason::Unresolved {
                    name: "Atlantis".into()
                }
            ),
            (5, SkipReason::Comment),
        ]
    );

    let stats = report.stats();
    assert_eq!(stats.lines(), 5);
    assert_eq!((stats.accepted, stats.out_of_scope, stats.unresolved), (1, 1, 1));
}

#[test]
fn skipping_dependencies_only_fetches_eyeballs() {
    let stub = StubSource::with_france();
    let config = PipelineConfig {
        dependencies: false,
        top: 1,
        ..PipelineConfig::default()
    };
    let report = run(&stub, config);

    assert_eq!(stub.calls(), vec!["eyeball FR 1".to_string()]);
    let fr = &report.records["France"];
    assert_eq!(fr.eyeball.len(), 1);
    assert!(fr.eyeball[0].dependency.is_empty());
}

#[test]
fn output_document_shape() {
    let stub = StubSource::with_france();
    let report = run(&stub, PipelineConfig::default());
    let json = to_sorted_string(&report.records).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    let fr = &value["France"];
    assert_eq!(fr["start"], "2020-03-17");
    assert_eq!(fr["scope"], "National");
    assert_eq!(fr["monitoring_dates"]["lockdown"]["monday"], "2020-03-16");
    assert_eq!(fr["monitoring_dates"]["lockdown"]["sunday"], "2020-03-22");
    assert_eq!(fr["monitoring_dates"]["before"]["monday"], "2020-02-17");
    assert_eq!(fr["monitoring_dates"]["before"]["sunday"], "2020-02-23");
    assert_eq!(fr["eyeball"][0]["dependency"][0]["name"], "NAME-5511");
    assert!(json.starts_with("{\n    \"France\": {\n        \"cc\": \"FR\","));
}

#[test]
fn reruns_are_byte_identical() {
    let first =
        to_sorted_string(&run(&StubSource::with_france(), PipelineConfig::default()).records)
            .unwrap();
    let second =
        to_sorted_string(&run(&StubSource::with_france(), PipelineConfig::default()).records)
            .unwrap();
    assert_eq!(first, second);
}

#[test]
fn records_can_be_keyed_by_code_and_later_lines_win() {
    let stub = StubSource::with_france();
    let db = CountryDb::bundled().unwrap();
    let config = PipelineConfig {
        key: RecordKey::Cc,
        dependencies: false,
        ..PipelineConfig::default()
    };
    let lines = [
        "France 2020-03-17 2020-05-11 National",
        "France 2020-10-30 2020-12-15 National",
    ];
    let report = Pipeline::new(db, &stub, config).run(lines).unwrap();

    assert_eq!(report.records.len(), 1);
    assert_eq!(report.accepted, 2);
    assert_eq!(
        report.records["FR"].start,
        NaiveDate::from_ymd_opt(2020, 10, 30).unwrap()
    );
}

#[test]
fn a_failing_service_aborts_the_run() {
    let stub = StubSource::default();
    let db = CountryDb::bundled().unwrap();
    let err = Pipeline::new(db, &stub, PipelineConfig::default())
        .run(["Spain 2020-03-14 2020-06-21 National"])
        .unwrap_err();
    assert!(matches!(err, LockdownError::Schema { service: "eyeball", .. }));
}
