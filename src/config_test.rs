use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_reads_host_and_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PAY_BUDDY_HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_lookup_accepts_ipv6_host() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PAY_BUDDY_HOST", "::1")])).unwrap();
    assert_eq!(cfg.addr().to_string(), "[::1]:3000");
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn from_lookup_rejects_bad_host() {
    let err = ServerConfig::from_lookup(lookup(&[("PAY_BUDDY_HOST", "localhost")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PAY_BUDDY_HOST: \"localhost\"");
}

#[test]
fn dotenv_failure_ignores_missing_file() {
    let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(dotenv_failure(Err(missing)).is_none());
    assert!(dotenv_failure(Ok(PathBuf::from(".env"))).is_none());
}

#[test]
fn dotenv_failure_reports_malformed_file() {
    let malformed = dotenvy::Error::LineParse("PORT 3000".into(), 5);
    assert!(dotenv_failure(Err(malformed)).is_some());
}
