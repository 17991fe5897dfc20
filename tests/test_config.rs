use wicket::config::Config;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 8000);
    assert_eq!(cfg.server.backlog, 10);
    assert_eq!(cfg.server.root, ".");
    assert!(cfg.routes.is_empty());
    assert_eq!(cfg.private, vec!["/.git".to_string(), "/.env".to_string()]);
}

#[test]
fn test_config_listen_addr() {
    let cfg = Config::default();
    assert_eq!(cfg.listen_addr(), "0.0.0.0:8000");
}

#[test]
fn test_config_from_yaml_full() {
    let yaml = r#"
server:
  host: 127.0.0.1
  port: 9090
  backlog: 32
  root: /var/www
routes:
  /: /index.html
  /about: /about.html
private:
  - /.git
  - /secrets
"#;

    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.server.backlog, 32);
    assert_eq!(cfg.server.root, "/var/www");
    assert_eq!(cfg.routes.get("/").unwrap(), "/index.html");
    assert_eq!(cfg.routes.get("/about").unwrap(), "/about.html");
    assert_eq!(cfg.private, vec!["/.git".to_string(), "/secrets".to_string()]);
}

#[test]
fn test_config_from_yaml_partial_fills_defaults() {
    let yaml = r#"
server:
  port: 3000
"#;

    let cfg = Config::from_yaml(yaml).unwrap();

    assert_eq!(cfg.server.port, 3000);
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.backlog, 10);
    assert_eq!(cfg.private, vec!["/.git".to_string(), "/.env".to_string()]);
}

#[test]
fn test_config_from_yaml_invalid() {
    assert!(Config::from_yaml("server: [not, a, map]").is_err());
}
