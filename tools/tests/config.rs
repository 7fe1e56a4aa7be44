use indoc::indoc;
use tle_decoder::decode_tle_set;
use tools::config::{Config, ConfigError, Satellite};

const TLE_SET: &str = indoc! {r#"
    ISS (ZARYA)
    1 25544U 98067A   24090.85387774  .00026911  00000+0  48154-3 0  9997
    2 25544  51.6412 343.7480 0004304  23.3245  97.2192 15.49778798446391
    GEO1
    1 37481U 11019A   23190.45078927 -.00000009  00000-0  00000+0 0  9991
    2 37481   2.3847  40.6385 0001640  70.7486  43.7146  1.00272292 44578
    GEO2
    1 39120U 13011A   23190.50177227 -.00000262  00000-0  00000+0 0  9997
    2 39120   2.3950  38.7964 0001772  68.0002 323.0070  1.00271163 37822
    "#};

fn selected_names(cfg: &Config) -> Vec<String> {
    let records = decode_tle_set(TLE_SET).unwrap();
    cfg.record_filter()
        .unwrap()
        .apply(records)
        .into_iter()
        .map(|r| r.object_name)
        .collect()
}

#[test]
fn empty_config_keeps_everything() {
    let cfg = Config::from_str_checked("").unwrap();
    assert_eq!(cfg, Config::default());
    assert!(!cfg.compact());
    assert_eq!(selected_names(&cfg), ["ISS (ZARYA)", "GEO1", "GEO2"]);
}

#[test]
fn satellite_selection() {
    let cfg = Config::from_str_checked(indoc! {r#"
        name = "geo only"
        compact = true

        [[satellite]]
        matches = "^GEO"
        "#})
    .unwrap();
    assert_eq!(cfg.name.as_deref(), Some("geo only"));
    assert!(cfg.compact());
    assert_eq!(selected_names(&cfg), ["GEO1", "GEO2"]);

    let cfg = Config::from_str_checked(indoc! {r#"
        [[satellites]]
        id = 25544

        [[satellites]]
        name = "GEO2"
        "#})
    .unwrap();
    assert_eq!(
        cfg.satellites,
        vec![
            Satellite {
                id: Some(25544),
                ..Default::default()
            },
            Satellite {
                name: Some("GEO2".to_owned()),
                ..Default::default()
            },
        ]
    );
    assert_eq!(selected_names(&cfg), ["ISS (ZARYA)", "GEO2"]);
}

#[test]
fn regex_matches_catalog_number() {
    let cfg = Config::from_str_checked(indoc! {r#"
        [[satellite]]
        matches = "^3748"
        "#})
    .unwrap();
    assert_eq!(selected_names(&cfg), ["GEO1"]);
}

#[test]
fn invalid_configs() {
    let err = Config::from_str_checked(indoc! {r#"
        [[satellite]]
        matches = "GEO("
        "#})
    .unwrap_err();
    assert!(matches!(err, ConfigError::Regex(_)));

    let err = Config::from_str_checked(indoc! {r#"
        [[satellite]]
        id = 1

        [[satellite]]
        "#})
    .unwrap_err();
    assert!(matches!(err, ConfigError::MissingSelector(1)));

    let err = Config::from_str_checked("compact = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}
