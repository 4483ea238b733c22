//! Multi-line classification scenarios
//!
//! Feeds realistic server output through `LineClassifier` and checks the
//! category of every line, plus the detector state left behind.

use atg_log_colorizer::classifier::rules::RULES;
use atg_log_colorizer::classifier::{BlockKind, Category, LineClassifier, ServerType};
use proptest::prelude::*;

fn classify_all(lines: &[&str]) -> (Vec<Option<Category>>, LineClassifier) {
    let mut classifier = LineClassifier::new();
    let categories = lines.iter().map(|line| classifier.classify(line)).collect();
    (categories, classifier)
}

fn rule_position(name: &str) -> usize {
    RULES
        .iter()
        .position(|rule| rule.name == name)
        .unwrap_or_else(|| panic!("no rule named {name}"))
}

#[test]
fn test_jboss_startup_sequence() {
    // Trimming removes the leading space " DEBUG [" needs, so the bare
    // DEBUG line is unclassified while a timestamped one is Debug.
    let (categories, classifier) = classify_all(&[
        "",
        "Starting JBoss",
        " DEBUG [org.jboss.Foo] hi",
        "INFO  [STDOUT] normal output",
        "2007-04-11 16:59:02,474 DEBUG [org.jboss.Foo] hi",
    ]);

    assert_eq!(
        categories,
        vec![
            None,
            Some(Category::Other),
            Some(Category::Other),
            Some(Category::Info),
            Some(Category::Debug),
        ]
    );
    assert_eq!(classifier.server(), ServerType::JBoss);
}

#[test]
fn test_thread_dump_outranks_known_errors() {
    let (categories, classifier) = classify_all(&[
        "Full thread dump Java HotSpot(TM) Server VM (1.5.0_11-b03 mixed mode):",
        "\"RMI TCP Connection(3)\" daemon prio=1 tid=0x08a3c800 nid=0x1c8a runnable",
        "Failing NucleusServlet startup",
        "10:00:00,000 ERROR [org.jboss.Foo] inside dump",
        "\"Suspend Checker Thread\" prio=10 tid=0x0806dc00 nid=0x1c6f runnable",
        "Failing NucleusServlet startup",
    ]);

    assert_eq!(
        categories,
        vec![
            Some(Category::Info),
            Some(Category::Info),
            Some(Category::Info),
            Some(Category::Info),
            Some(Category::Info),
            Some(Category::Error),
        ]
    );
    assert!(!classifier.state().in_thread_dump());
}

#[test]
fn test_sql_block_closure() {
    let (categories, classifier) = classify_all(&[
        "SQL Statement Failed: [++SQLInsert++]",
        "INSERT INTO foo(id,name) VALUES(?,?)",
        "[--SQLInsert--]",
    ]);

    assert_eq!(categories, vec![Some(Category::Error); 3]);
    assert!(!classifier.state().is_active(BlockKind::SqlDebug));
}

#[test]
fn test_web_service_error_block() {
    // The closing bracketed line is not part of the block and is classified
    // by the rules on its own.
    let (categories, classifier) = classify_all(&[
        "2007-04-11 16:59:10,358 ERROR [org.jboss.axis.client.Call] Request for",
        "Cluster: DefaultCluster",
        "http://localhost:8080/services/PricingService",
        "2007-04-11 16:59:10,360 INFO  [org.jboss.axis.client.Call] failed on request",
        "Cluster: DefaultCluster",
    ]);

    assert_eq!(
        categories,
        vec![
            Some(Category::Error),
            Some(Category::Error),
            Some(Category::Error),
            Some(Category::Info),
            Some(Category::Other),
        ]
    );
    assert!(!classifier.state().is_active(BlockKind::WebServiceError));
}

#[test]
fn test_table_debug_block_closes_on_paren() {
    let (categories, classifier) = classify_all(&[
        "2007-04-11 16:58:59,553 DEBUG [org.jboss.ejb.plugins.cmp.jdbc.JDBCStartCommand] Executing SQL: create table jboss_item (",
        "id VARCHAR(40) NOT NULL,",
        "CONSTRAINT pk_item PRIMARY KEY (id)",
        ")",
        "id VARCHAR(40) NOT NULL,",
    ]);

    assert_eq!(
        categories,
        vec![
            Some(Category::Debug),
            Some(Category::Debug),
            Some(Category::Debug),
            Some(Category::Debug),
            Some(Category::Other),
        ]
    );
    assert!(classifier.state().active_blocks().is_empty());
}

fn environment_dump(entries: usize) -> Vec<String> {
    let mut lines =
        vec!["2007-03-05 23:19:58,092 INFO  [atg.nucleus.servlet.NucleusServlet] ENVIRONMENT=".to_string()];
    lines.extend((0..entries).map(|i| format!("atg.dynamo.property{i}=value")));
    lines
}

#[test]
fn test_environment_lookback_is_bounded() {
    let dump = environment_dump(15);
    let lines: Vec<&str> = dump.iter().map(String::as_str).collect();
    let (categories, _) = classify_all(&lines);

    // sentinel plus fourteen entries at offsets 0..=13
    assert!(categories[..15].iter().all(|c| *c == Some(Category::Info)));
    // sentinel now at offset 14
    assert_eq!(categories[15], Some(Category::Other));
}

#[test]
fn test_blank_lines_do_not_count_toward_lookback() {
    let mut lines = vec!["23:19:58,092 INFO  [atg.nucleus.servlet.NucleusServlet] ENVIRONMENT="];
    lines.extend(std::iter::repeat_n("", 30));
    lines.push("dataDir=/opt/jboss/bin/ATG-Data");

    let (categories, classifier) = classify_all(&lines);
    assert_eq!(categories.last().copied().flatten(), Some(Category::Info));
    assert_eq!(classifier.history().len(), 2);
}

#[test]
fn test_error_table_precedes_warning_table() {
    assert!(rule_position("known-error") < rule_position("known-warning"));

    let (categories, _) = classify_all(&["WARNING: Failing NucleusServlet startup"]);
    assert_eq!(categories, vec![Some(Category::Error)]);

    let (categories, _) = classify_all(&["WARNING: Unsupported application server"]);
    assert_eq!(categories, vec![Some(Category::Warning)]);
}

#[test]
fn test_stack_trace_after_log4j_error() {
    let (categories, _) = classify_all(&[
        "2007-03-14 16:44:38,493 ERROR [org.apache.commons.modeler.Registry] Error registering jboss.web:type=RequestProcessor",
        "java.lang.SecurityException: MBeanTrustPermission(register) not implied by protection domain",
        "at org.jboss.mx.server.registry.BasicMBeanRegistry.registerMBean(BasicMBeanRegistry.java:212)",
        "Caused by: java.lang.IllegalStateException: boom",
        "... 42 more",
    ]);
    assert_eq!(categories, vec![Some(Category::Error); 5]);
}

#[test]
fn test_jboss_service_binding() {
    let (categories, _) = classify_all(&[
        "Starting JBoss (MX MicroKernel)...",
        "2006-06-26 14:34:53,406 DEBUG [org.jboss.services.binding.ServiceBindingManager] applyServiceConfig, server:ports-lpa-base, bindings=",
        "ServiceBinding [name=;hostName=<ANY>;bindAddress=localhost/127.0.0.1;port=8280]",
    ]);
    assert_eq!(
        categories,
        vec![
            Some(Category::Other),
            Some(Category::Debug),
            Some(Category::Debug),
        ]
    );
}

#[test]
fn test_websphere_level_tokens() {
    let (categories, classifier) = classify_all(&[
        "WebSphere Platform 6.1 [ND 6.1.0.0 b0620.14]",
        "[4/9/07 11:22:23:683 EDT] 0000004c WebContainer  W   SRVE0180W: session id reused",
        "[4/9/07 11:22:24:001 EDT] 0000004c WebContainer  A   SRVE0169I: Loading Web Module",
    ]);
    assert_eq!(classifier.server(), ServerType::WebSphere);
    assert_eq!(categories[1], Some(Category::Warning));
    assert_eq!(categories[2], Some(Category::Info));
}

#[test]
fn test_weblogic_angle_tokens() {
    let (categories, classifier) = classify_all(&[
        "<Jan 22, 2008 3:02:27 PM CST> <Notice> <WebLogicServer> <BEA-000365> <WLS Kernel> <Server state changed to RUNNING>",
        "<Jan 22, 2008 3:02:28 PM CST> <Error> <HTTP> <BEA-101017> <Servlet failed>",
    ]);
    assert_eq!(classifier.server(), ServerType::WebLogic);
    assert_eq!(categories, vec![Some(Category::Info), Some(Category::Error)]);
}

#[test]
fn test_nucleus_lifecycle() {
    let (categories, _) = classify_all(&["**** info Nucleus running", "Nucleus running"]);
    assert_eq!(categories, vec![Some(Category::Nucleus), Some(Category::Nucleus)]);
}

proptest! {
    #[test]
    fn prop_every_non_blank_line_is_classified(lines in proptest::collection::vec("[ -~\t]{0,120}", 1..40)) {
        let mut classifier = LineClassifier::new();
        for line in &lines {
            let result = classifier.classify(line);
            prop_assert_eq!(result.is_none(), line.trim().is_empty());
        }
    }

    #[test]
    fn prop_classification_is_deterministic(lines in proptest::collection::vec("\\PC{0,80}", 1..30)) {
        let mut first = LineClassifier::new();
        let mut second = LineClassifier::new();
        for line in &lines {
            prop_assert_eq!(first.classify(line), second.classify(line));
        }
        prop_assert_eq!(first.state(), second.state());
    }
}
