//! Ordered single-line rule table
//!
//! After the detectors have had their say, a line is matched against
//! [`RULES`] top to bottom and takes the category of the first rule whose
//! conditions all hold. The order is load-bearing: broad rules (package
//! fragments, `INFO  [STDOUT]`) sit below the specific ones they would
//! otherwise shadow.

use super::category::Category;
use super::detectors::ServerType;
use super::history::History;
use super::known_errors::{is_known_error, is_known_warning};
use super::matcher::Matcher::{self, All, Any, Contains, EndsWith, Exactly, Not, StartsWith};

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub trimmed: &'a str,
    pub history: &'a History,
    pub server: ServerType,
}

/// One requirement of a [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// Current trimmed line matches
    Line(Matcher),
    /// Trimmed line at this history offset matches
    Prior(usize, Matcher),
    /// Trimmed line at some history offset in `0..=n` matches
    PriorWithin(usize, Matcher),
    /// Previous line was classified as this category
    PreviousIs(Category),
    Server(ServerType),
    NotServer(ServerType),
    /// Current line carries a known application error message
    KnownError,
    /// Current line carries a known application warning message
    KnownWarning,
}

impl Condition {
    pub fn holds(&self, ctx: &RuleContext<'_>) -> bool {
        match self {
            Condition::Line(matcher) => matcher.matches(ctx.trimmed),
            Condition::Prior(offset, matcher) => matcher.matches(ctx.history.trimmed(*offset)),
            Condition::PriorWithin(last, matcher) => {
                (0..=*last).any(|offset| matcher.matches(ctx.history.trimmed(offset)))
            }
            Condition::PreviousIs(category) => ctx.history.category(0) == *category,
            Condition::Server(server) => ctx.server == *server,
            Condition::NotServer(server) => ctx.server != *server,
            Condition::KnownError => is_known_error(ctx.trimmed),
            Condition::KnownWarning => is_known_warning(ctx.trimmed),
        }
    }
}

/// Conjunction of conditions mapped to a category.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub when: &'static [Condition],
    pub category: Category,
}

impl Rule {
    pub fn applies(&self, ctx: &RuleContext<'_>) -> bool {
        self.when.iter().all(|condition| condition.holds(ctx))
    }
}

/// First rule in table order that applies to `ctx`.
pub fn first_match(ctx: &RuleContext<'_>) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.applies(ctx))
}

use Category::{Debug, Error, Info, Nucleus, Other, Warning};
use Condition::{KnownError, KnownWarning, Line, NotServer, PreviousIs, Prior, PriorWithin, Server};

/// Java package roots at the start of a line.
const PACKAGE_PREFIX: Matcher = Any(&[
    StartsWith("com."),
    StartsWith("org."),
    StartsWith("atg."),
    StartsWith("jrockit."),
    StartsWith("java."),
    StartsWith("javax."),
    StartsWith("webservices."),
    StartsWith("sun."),
    StartsWith("oracle."),
    StartsWith("weblogic."),
]);

/// Java package roots anywhere in a line.
const PACKAGE_FRAGMENT: Matcher = Any(&[
    Contains("com."),
    Contains("org."),
    Contains("atg."),
    Contains("jrockit."),
    Contains("java."),
    Contains("javax."),
    Contains("webservices."),
    Contains("sun."),
    Contains("oracle."),
    Contains("weblogic."),
]);

/// Shapes of Java stack trace lines.
const STACK_FRAME: Matcher = Any(&[
    Contains("[STDOUT]     at"),
    StartsWith("at "),
    StartsWith("org."),
    StartsWith("(org."),
    StartsWith("sun."),
    StartsWith("(sun."),
    StartsWith("atg."),
    StartsWith("(atg."),
    StartsWith("com."),
    StartsWith("(com."),
    StartsWith("jrockit."),
    StartsWith("(jrockit."),
    StartsWith("webservices."),
    StartsWith("(webservices."),
    StartsWith("java."),
    StartsWith("(java."),
    StartsWith("javax."),
    StartsWith("(javax."),
    StartsWith("oracle."),
    StartsWith("(oracle."),
    StartsWith("weblogic."),
    StartsWith("(weblogic."),
    StartsWith("<no "),
    StartsWith("CAUSE:"),
    StartsWith("Exception in"),
    StartsWith("Caused by"),
    StartsWith("Symbol"),
    StartsWith("Location"),
    StartsWith("...stack"),
    StartsWith("... stack"),
    StartsWith(".... "),
    StartsWith("....stack"),
    StartsWith(".... stack"),
    StartsWith("CAUGHT AT:"),
    StartsWith("CONTAINER:"),
    StartsWith("SOURCE EXCEPTION:"),
    Contains("nested exception is:"),
]);

/// Environment properties printed under `ENVIRONMENT=`.
const ENVIRONMENT_ENTRY: Matcher = Any(&[
    StartsWith("atg.dynamo"),
    StartsWith("atg.license"),
    StartsWith("dataDir"),
    StartsWith("servername"),
    StartsWith("standlone"),
]);

// DAS writes `**** Error` banners through JBoss STDOUT as a run of lines,
// most of them empty after the `INFO  [STDOUT]` prefix.
const STDOUT_EMPTY: Matcher = EndsWith("INFO  [STDOUT]");
const STDOUT_ANY: Matcher = Contains("INFO  [STDOUT]");
const STDOUT_SEPARATOR: Matcher = Any(&[EndsWith("INFO  [STDOUT] /"), EndsWith("INFO  [STDOUT] ---")]);
const ERROR_BANNER: Matcher = EndsWith("[STDOUT] **** Error");
const WARNING_BANNER: Matcher = EndsWith("[STDOUT] **** Warning");

const ARCHIVE_AGENT_FAILURE: &str = "Error while handling scheduled job J2EE Archive Directory Agent";

/// The rule chain, evaluated top to bottom.
pub static RULES: &[Rule] = &[
    Rule {
        name: "hard-failure",
        when: &[Line(Any(&[
            Contains("Throwable while attempting to get a new connection"),
            Contains("Exception destroying ManagedConnection"),
            Contains("ConcurrentUpdateException caught updating an item during a commit"),
            Contains("XAException: tx="),
            Contains("] Failed to connect to "),
            Contains("java.lang.NoClassDefFoundError"),
            Contains("Error registering request"),
            Contains("java.lang.NullPointerException"),
            Contains("Illegal access: this web application instance has been stopped already."),
        ]))],
        category: Error,
    },
    Rule {
        name: "nucleus-lifecycle",
        when: &[Line(Any(&[
            Contains("Nucleus running"),
            Contains("Starting Nucleus"),
            Contains("Invoking custom Nucleus"),
            Contains("Nucleus shutting down"),
            Contains("Nucleus shutdown complete"),
            Contains("Nucleus not running"),
        ]))],
        category: Nucleus,
    },
    // DAS prefixes its own output with `**** <level>`
    Rule {
        name: "das-error",
        when: &[Line(Contains("**** Error"))],
        category: Error,
    },
    Rule {
        name: "das-info",
        when: &[Line(Contains("**** info"))],
        category: Info,
    },
    Rule {
        name: "das-debug",
        when: &[Line(Any(&[Contains("**** debug"), Contains("**** Debug")]))],
        category: Debug,
    },
    Rule {
        name: "das-warning",
        when: &[Line(Contains("**** Warning"))],
        category: Warning,
    },
    // log4j; a misconfigured JBoss routes all ATG output through INFO  [STDOUT]
    Rule {
        name: "log4j-info",
        when: &[Line(All(&[Contains(" INFO  ["), Not(&Contains("INFO  [STDOUT]"))]))],
        category: Info,
    },
    Rule {
        name: "log4j-warn",
        when: &[Line(Contains(" WARN  ["))],
        category: Warning,
    },
    Rule {
        name: "log4j-error",
        when: &[Line(Any(&[Contains(" ERROR ["), Contains(" FATAL [")]))],
        category: Error,
    },
    Rule {
        name: "jboss-create-table-failure",
        when: &[Line(Contains("Could not create table with SQL"))],
        category: Error,
    },
    Rule {
        name: "log4j-debug",
        when: &[Line(Contains(" DEBUG ["))],
        category: Debug,
    },
    // tomcat
    Rule {
        name: "brace-info",
        when: &[Line(Any(&[Contains("{INFO}"), Contains("{CONFIG}")]))],
        category: Info,
    },
    Rule {
        name: "brace-warn",
        when: &[Line(Contains("{WARN}"))],
        category: Warning,
    },
    Rule {
        name: "brace-error",
        when: &[Line(Any(&[Contains("{ERROR}"), Contains("{FATAL}")]))],
        category: Error,
    },
    Rule {
        name: "brace-debug",
        when: &[Line(Contains("{DEBUG}"))],
        category: Debug,
    },
    Rule {
        name: "bracket-info",
        when: &[Line(Any(&[Contains("info]"), Contains("config]")]))],
        category: Info,
    },
    Rule {
        name: "bracket-warn",
        when: &[Line(Contains("warn]"))],
        category: Warning,
    },
    Rule {
        name: "bracket-error",
        when: &[Line(Any(&[Contains("error]"), Contains("fatal]")]))],
        category: Error,
    },
    Rule {
        name: "bracket-debug",
        when: &[Line(Contains("debug]"))],
        category: Debug,
    },
    // weblogic
    Rule {
        name: "weblogic-info",
        when: &[Line(Any(&[Contains("<Notice>"), Contains("<Info>")]))],
        category: Info,
    },
    Rule {
        name: "weblogic-warning",
        when: &[Line(Any(&[Contains("<Alert>"), Contains("<Warning>")]))],
        category: Warning,
    },
    Rule {
        name: "weblogic-error",
        when: &[Line(Any(&[
            Contains("<Error>"),
            Contains("<Critical>"),
            Contains("<Emergency>"),
        ]))],
        category: Error,
    },
    Rule {
        name: "weblogic-debug",
        when: &[Line(Contains("<Debug>"))],
        category: Debug,
    },
    // class names inside JBoss XML dumps, e.g. <attribute name="PoolFactoryClass">
    Rule {
        name: "xml-class-name",
        when: &[Line(PACKAGE_PREFIX), Prior(0, StartsWith("<")), PreviousIs(Other)],
        category: Other,
    },
    // class loader line following a `... <no signer certificates>)` error
    Rule {
        name: "class-loader-after-error",
        when: &[Line(PACKAGE_PREFIX), Prior(0, EndsWith(">)")), PreviousIs(Error)],
        category: Error,
    },
    Rule {
        name: "axis-fault-hostname",
        when: &[
            Line(StartsWith("{http://xml.apache.org/axis/}hostname:")),
            PreviousIs(Error),
        ],
        category: Error,
    },
    Rule {
        name: "environment-dump",
        when: &[
            Line(ENVIRONMENT_ENTRY),
            PriorWithin(13, EndsWith("ENVIRONMENT=")),
            PreviousIs(Info),
        ],
        category: Info,
    },
    Rule {
        name: "sql-statement-failed",
        when: &[Line(StartsWith("SQL Statement Failed"))],
        category: Error,
    },
    // `Type:` and `Content:` lines of a JNDI link reference
    Rule {
        name: "naming-link-reference",
        when: &[
            Line(Any(&[StartsWith("Type: "), StartsWith("Content: ")])),
            PriorWithin(1, Contains(" DEBUG [")),
        ],
        category: Debug,
    },
    // `=` excludes property listings such as java.naming.factory.initial=...
    Rule {
        name: "stack-frame",
        when: &[Line(STACK_FRAME), Line(Not(&Contains("=")))],
        category: Error,
    },
    Rule {
        name: "elided-frames",
        when: &[Line(All(&[Contains("..."), Contains("more")]))],
        category: Error,
    },
    Rule {
        name: "packaged-exception",
        when: &[
            Line(Any(&[Contains("Exception:"), Contains("Exception thrown")])),
            Line(PACKAGE_FRAGMENT),
        ],
        category: Error,
    },
    Rule {
        name: "windows-path-after-error",
        when: &[
            Line(Any(&[StartsWith("C:"), StartsWith("D:")])),
            PreviousIs(Error),
            NotServer(ServerType::WebSphere),
        ],
        category: Error,
    },
    Rule {
        name: "severe",
        when: &[Line(Any(&[StartsWith("SEVERE:"), StartsWith("XML parsing error:")]))],
        category: Error,
    },
    // javac output for a failed JSP compile
    Rule {
        name: "compiler-continuation",
        when: &[
            Line(Any(&[
                StartsWith(">"),
                StartsWith(")"),
                StartsWith("^"),
                Contains(".java:"),
                Contains("Line:"),
                Contains("location:"),
                Contains("symbol  :"),
                Contains(".jsp;"),
                EndsWith(" error"),
                EndsWith(" errors"),
            ])),
            PreviousIs(Error),
        ],
        category: Error,
    },
    Rule {
        name: "container-source",
        when: &[Line(All(&[Contains("CONTAINER:"), Contains("SOURCE:")]))],
        category: Error,
    },
    Rule {
        name: "stdout-error-banner-1",
        when: &[Line(STDOUT_EMPTY), Prior(0, ERROR_BANNER)],
        category: Error,
    },
    Rule {
        name: "stdout-error-banner-2",
        when: &[Line(STDOUT_ANY), Prior(0, STDOUT_EMPTY), Prior(1, ERROR_BANNER)],
        category: Error,
    },
    Rule {
        name: "stdout-error-banner-3",
        when: &[
            Line(STDOUT_EMPTY),
            Prior(0, STDOUT_ANY),
            Prior(1, STDOUT_EMPTY),
            Prior(2, ERROR_BANNER),
        ],
        category: Error,
    },
    Rule {
        name: "stdout-error-banner-4",
        when: &[
            Line(STDOUT_ANY),
            Prior(0, STDOUT_EMPTY),
            Prior(1, STDOUT_ANY),
            Prior(2, STDOUT_EMPTY),
            Prior(3, ERROR_BANNER),
        ],
        category: Error,
    },
    Rule {
        name: "stdout-error-banner-5",
        when: &[
            Line(STDOUT_EMPTY),
            Prior(0, STDOUT_ANY),
            Prior(1, STDOUT_EMPTY),
            Prior(2, STDOUT_ANY),
            Prior(3, STDOUT_EMPTY),
            Prior(4, ERROR_BANNER),
        ],
        category: Error,
    },
    Rule {
        name: "stdout-error-banner-6",
        when: &[
            Line(STDOUT_SEPARATOR),
            Prior(0, STDOUT_EMPTY),
            Prior(1, STDOUT_ANY),
            Prior(2, STDOUT_EMPTY),
            Prior(3, STDOUT_ANY),
            Prior(4, STDOUT_EMPTY),
            Prior(5, ERROR_BANNER),
        ],
        category: Error,
    },
    Rule {
        name: "stdout-error-banner-7",
        when: &[
            Line(STDOUT_EMPTY),
            Prior(0, STDOUT_SEPARATOR),
            Prior(1, STDOUT_EMPTY),
            Prior(2, STDOUT_ANY),
            Prior(3, STDOUT_EMPTY),
            Prior(4, STDOUT_ANY),
            Prior(5, STDOUT_EMPTY),
            Prior(6, ERROR_BANNER),
        ],
        category: Error,
    },
    Rule {
        name: "stdout-error-banner-8",
        when: &[
            Line(STDOUT_ANY),
            Prior(0, STDOUT_EMPTY),
            Prior(1, STDOUT_SEPARATOR),
            Prior(2, STDOUT_EMPTY),
            Prior(3, STDOUT_ANY),
            Prior(4, STDOUT_EMPTY),
            Prior(5, STDOUT_ANY),
            Prior(6, STDOUT_EMPTY),
            Prior(7, ERROR_BANNER),
        ],
        category: Error,
    },
    Rule {
        name: "stdout-warning-banner-1",
        when: &[Line(STDOUT_EMPTY), Prior(0, WARNING_BANNER)],
        category: Warning,
    },
    Rule {
        name: "stdout-warning-banner-2",
        when: &[Line(STDOUT_ANY), Prior(0, STDOUT_EMPTY), Prior(1, WARNING_BANNER)],
        category: Warning,
    },
    Rule {
        name: "stdout-warning-banner-3",
        when: &[
            Line(STDOUT_EMPTY),
            Prior(0, STDOUT_ANY),
            Prior(1, STDOUT_EMPTY),
            Prior(2, WARNING_BANNER),
        ],
        category: Warning,
    },
    Rule {
        name: "stdout-warning-banner-4",
        when: &[
            Line(STDOUT_ANY),
            Prior(0, STDOUT_EMPTY),
            Prior(1, STDOUT_ANY),
            Prior(2, STDOUT_EMPTY),
            Prior(3, WARNING_BANNER),
        ],
        category: Warning,
    },
    Rule {
        name: "stdout-warning-banner-5",
        when: &[
            Line(STDOUT_EMPTY),
            Prior(0, STDOUT_ANY),
            Prior(1, STDOUT_EMPTY),
            Prior(2, STDOUT_ANY),
            Prior(3, STDOUT_EMPTY),
            Prior(4, WARNING_BANNER),
        ],
        category: Warning,
    },
    Rule {
        name: "stdout-warning-banner-6",
        when: &[
            Line(STDOUT_SEPARATOR),
            Prior(0, STDOUT_EMPTY),
            Prior(1, STDOUT_ANY),
            Prior(2, STDOUT_EMPTY),
            Prior(3, STDOUT_ANY),
            Prior(4, STDOUT_EMPTY),
            Prior(5, WARNING_BANNER),
        ],
        category: Warning,
    },
    Rule {
        name: "stdout-warning-banner-7",
        when: &[
            Line(STDOUT_EMPTY),
            Prior(0, STDOUT_SEPARATOR),
            Prior(1, STDOUT_EMPTY),
            Prior(2, STDOUT_ANY),
            Prior(3, STDOUT_EMPTY),
            Prior(4, STDOUT_ANY),
            Prior(5, STDOUT_EMPTY),
            Prior(6, WARNING_BANNER),
        ],
        category: Warning,
    },
    Rule {
        name: "stdout-warning-banner-8",
        when: &[
            Line(STDOUT_ANY),
            Prior(0, STDOUT_EMPTY),
            Prior(1, STDOUT_SEPARATOR),
            Prior(2, STDOUT_EMPTY),
            Prior(3, STDOUT_ANY),
            Prior(4, STDOUT_EMPTY),
            Prior(5, STDOUT_ANY),
            Prior(6, STDOUT_EMPTY),
            Prior(7, WARNING_BANNER),
        ],
        category: Warning,
    },
    Rule {
        name: "stdout-exception-after-separator",
        when: &[
            Line(STDOUT_ANY),
            Line(PACKAGE_FRAGMENT),
            Prior(0, STDOUT_EMPTY),
            Prior(1, EndsWith("INFO  [STDOUT] ---")),
        ],
        category: Error,
    },
    Rule {
        name: "stdout-packaged-exception",
        when: &[
            Line(Any(&[
                Contains("com."),
                Contains("INFO  [STDOUT] org."),
                Contains("INFO  [STDOUT] atg."),
                Contains("INFO  [STDOUT] jrockit."),
                Contains("INFO  [STDOUT] sun."),
                Contains("INFO  [STDOUT] java."),
                Contains("INFO  [STDOUT] webservices."),
                Contains("INFO  [STDOUT] oracle."),
                Contains("INFO  [STDOUT] javax."),
                Contains("INFO  [STDOUT] weblogic."),
            ])),
            Line(All(&[Contains("Exception"), Contains(":")])),
        ],
        category: Error,
    },
    Rule {
        name: "nested-throwable",
        when: &[Line(Any(&[
            Contains("---- Begin backtrace for Nested Throwables"),
            Contains(" INFO  [STDOUT] \tat "),
            Contains("Invalid/unknown identity:"),
        ]))],
        category: Error,
    },
    Rule {
        name: "deployment-warning",
        when: &[Line(Any(&[
            Contains("recovered deployment status is either not from this server or does not match"),
            Contains("Test this hotfix on a staging or other non-production environment"),
            Contains(" HOTFIX: DO NOT patch beyond ATG"),
        ]))],
        category: Warning,
    },
    Rule {
        name: "jboss-service-binding",
        when: &[
            Server(ServerType::JBoss),
            Prior(0, All(&[EndsWith("bindings="), Contains(" DEBUG [")])),
            Line(StartsWith("ServiceBinding")),
        ],
        category: Debug,
    },
    Rule {
        name: "archive-agent-failure",
        when: &[Line(Any(&[
            Contains(ARCHIVE_AGENT_FAILURE),
            EndsWith("java.lang.ThreadDeath"),
        ]))],
        category: Error,
    },
    Rule {
        name: "archive-agent-failure-continuation",
        when: &[Line(STDOUT_EMPTY), Prior(0, Contains(ARCHIVE_AGENT_FAILURE))],
        category: Error,
    },
    Rule {
        name: "known-error",
        when: &[KnownError],
        category: Error,
    },
    Rule {
        name: "sop-debug",
        when: &[Line(Any(&[
            Contains("*** Checking in all assets."),
            Contains("exporting repository:"),
            Contains("Done - Pausing, hit enter to exit"),
        ]))],
        category: Debug,
    },
    Rule {
        name: "known-warning",
        when: &[KnownWarning],
        category: Warning,
    },
    Rule {
        name: "sop-info",
        when: &[Line(Any(&[
            Contains("Using default context-root"),
            Contains("Component browsing disabled"),
            Contains("Starting web app nucleus for application"),
            Contains("ATG-Data localconfig for default server"),
            Contains("Stopping Pointbase server..."),
            Contains("Pointbase server stopped."),
            StartsWith("Shutdown complete"),
            StartsWith("Halting VM"),
            Contains("Configuration file read-only so engine configuration changes will not be saved"),
            Contains("ATG-Data localconfig for server"),
            StartsWith("Query: "),
            StartsWith("INFO: "),
        ]))],
        category: Info,
    },
    Rule {
        name: "error-while-after-error",
        when: &[Line(Contains("Error while ")), PreviousIs(Error)],
        category: Error,
    },
    Rule {
        name: "liveconfig",
        when: &[Line(Any(&[
            All(&[StartsWith("LIVECONFIG=false"), EndsWith("LIVECONFIG=false")]),
            All(&[StartsWith("LIVECONFIG=true"), EndsWith("LIVECONFIG=true")]),
        ]))],
        category: Info,
    },
    // lone period closing some IBM stack traces
    Rule {
        name: "stack-trace-period",
        when: &[Line(Exactly(".")), PreviousIs(Error)],
        category: Error,
    },
    Rule {
        name: "websphere-error",
        when: &[
            Server(ServerType::WebSphere),
            Line(Any(&[
                Contains(" E "),
                Contains(" F "),
                Contains(" R "),
                Contains("     R \t"),
                Contains("SystemErr"),
            ])),
        ],
        category: Error,
    },
    Rule {
        name: "websphere-info",
        when: &[
            Server(ServerType::WebSphere),
            Line(Any(&[
                Contains(" I "),
                Contains(" A "),
                Contains(" C "),
                Contains(" D "),
            ])),
        ],
        category: Info,
    },
    Rule {
        name: "websphere-warning",
        when: &[Server(ServerType::WebSphere), Line(Contains(" W "))],
        category: Warning,
    },
    // unrouted ATG output on a misconfigured JBoss
    Rule {
        name: "stdout-fallback",
        when: &[Line(STDOUT_ANY)],
        category: Info,
    },
];
