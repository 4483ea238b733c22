//! Persistent multi-line detectors
//!
//! Application servers frequently wrap one logical message across many
//! physical lines that carry no level marker of their own: thread dumps,
//! JBoss ObjectName dumps, SQL statement failures, CLASSPATH listings. The
//! detectors here remember "still inside that record" across calls and force
//! the record's category onto every line until it closes.
//!
//! All state lives in [`DetectorState`], which the caller owns and threads
//! through each classification. Nothing is global, so independent
//! classifiers never interfere with each other.

use super::category::Category;
use super::matcher::Matcher::{self, All, Any, Contains, EndsWith, Not, StartsWith};
use tracing::debug;

/// Application server product that produced the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ServerType {
    #[default]
    Unknown,
    WebSphere,
    JBoss,
    WebLogic,
}

/// Banner fragments that identify each server product, checked in order.
static SERVER_SIGNATURES: [(ServerType, Matcher); 3] = [
    (
        ServerType::WebSphere,
        Any(&[
            Contains("WebSphere Platform"),
            Contains("ATG starting on IBM WebSphere"),
        ]),
    ),
    (
        ServerType::JBoss,
        Any(&[
            Contains("Starting JBoss"),
            Contains(" DEBUG [org.jboss"),
            Contains("org.jboss.system"),
            Contains("org.jboss.logging"),
        ]),
    ),
    (
        ServerType::WebLogic,
        Any(&[StartsWith("WebLogic Server"), Contains("WLS Kernel")]),
    ),
];

/// Marks the last thread printed by a HotSpot thread dump.
static THREAD_DUMP_END: Matcher = Any(&[
    Contains("VM Periodic Task Thread"),
    Contains("Suspend Checker Thread"),
]);

static THREAD_DUMP_START: Matcher = StartsWith("Full thread dump Java HotSpot");

/// Continuation lines of CLASSPATH= and CONFIGPATH= listings.
const PATH_ENTRY: Matcher = Any(&[
    StartsWith("C:"),
    StartsWith("D:"),
    StartsWith("/"),
    StartsWith("vfs="),
    StartsWith("ATG-Data"),
]);

/// Multi-line records tracked by a block detector, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// JBoss `[ObjectName: ...` dependency dump, closed by a trailing `]`
    ObjectNameDump,
    /// JBoss naming properties following `...NamingContextFactory`
    NamingFactory,
    /// JBoss DEBUG table definition, closed by a leading `)`
    TableDebug,
    /// JBoss cache `interceptor chain is:` listing
    InterceptorChain,
    /// `SQL Statement Failed: [++SQLInsert++]` ... `[--SQLInsert--]`
    SqlDebug,
    /// Web service `] Request for` failure dump
    WebServiceError,
    /// `CLASSPATH=` path listing
    ClassPath,
    /// `CONFIGPATH=` path listing
    ConfigPath,
}

impl BlockKind {
    pub const ALL: [BlockKind; 8] = [
        BlockKind::ObjectNameDump,
        BlockKind::NamingFactory,
        BlockKind::TableDebug,
        BlockKind::InterceptorChain,
        BlockKind::SqlDebug,
        BlockKind::WebServiceError,
        BlockKind::ClassPath,
        BlockKind::ConfigPath,
    ];

    fn index(self) -> usize {
        match self {
            BlockKind::ObjectNameDump => 0,
            BlockKind::NamingFactory => 1,
            BlockKind::TableDebug => 2,
            BlockKind::InterceptorChain => 3,
            BlockKind::SqlDebug => 4,
            BlockKind::WebServiceError => 5,
            BlockKind::ClassPath => 6,
            BlockKind::ConfigPath => 7,
        }
    }

    /// Stable detector name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::ObjectNameDump => "jboss-object-name-dump",
            BlockKind::NamingFactory => "jboss-naming-factory-block",
            BlockKind::TableDebug => "jboss-table-debug-block",
            BlockKind::InterceptorChain => "jboss-interceptor-chain-block",
            BlockKind::SqlDebug => "sql-debug-block",
            BlockKind::WebServiceError => "web-service-error-block",
            BlockKind::ClassPath => "classpath-dump-block",
            BlockKind::ConfigPath => "configpath-dump-block",
        }
    }
}

/// Opener/closer pair for one block detector.
struct BlockSpec {
    kind: BlockKind,
    /// Both opener and closer only apply on this server
    requires: Option<ServerType>,
    opener: Matcher,
    closer: Matcher,
    category: Category,
    /// Closing line takes the block's category; otherwise it falls through
    claims_closing_line: bool,
}

static BLOCKS: [BlockSpec; 8] = [
    BlockSpec {
        kind: BlockKind::ObjectNameDump,
        requires: None,
        opener: All(&[
            Contains("[ObjectName:"),
            Contains(" DEBUG ["),
            Contains("jboss"),
        ]),
        closer: All(&[EndsWith("]"), Not(&Contains(" INFO  [STDOUT]"))]),
        category: Category::Debug,
        claims_closing_line: true,
    },
    BlockSpec {
        kind: BlockKind::NamingFactory,
        requires: Some(ServerType::JBoss),
        opener: All(&[EndsWith("NamingContextFactory"), Contains(" DEBUG [")]),
        closer: Contains("["),
        category: Category::Debug,
        claims_closing_line: true,
    },
    BlockSpec {
        kind: BlockKind::TableDebug,
        requires: None,
        opener: All(&[
            EndsWith("("),
            Contains(" DEBUG ["),
            Contains("table"),
            Contains("jboss"),
        ]),
        closer: StartsWith(")"),
        category: Category::Debug,
        claims_closing_line: true,
    },
    BlockSpec {
        kind: BlockKind::InterceptorChain,
        requires: Some(ServerType::JBoss),
        opener: EndsWith("interceptor chain is:"),
        closer: Not(&StartsWith("class org.")),
        category: Category::Info,
        claims_closing_line: false,
    },
    BlockSpec {
        kind: BlockKind::SqlDebug,
        requires: None,
        opener: Any(&[
            Contains("SQL Statement Failed: [++SQLInsert++]"),
            Contains("SQL Statement Failed: [++SQLUpdate++]"),
            Contains("SQL Statement Failed: [++SQLDelete++]"),
            Contains("SQL Statement Failed: [++SQLSelect++]"),
        ]),
        closer: Any(&[
            Contains("[--SQLInsert--]"),
            Contains("[--SQLUpdate--]"),
            Contains("[--SQLDelete--]"),
            Contains("[--SQLSelect--]"),
        ]),
        category: Category::Error,
        claims_closing_line: true,
    },
    BlockSpec {
        kind: BlockKind::WebServiceError,
        requires: None,
        opener: All(&[EndsWith("] Request for"), Contains(" ERROR [")]),
        closer: Any(&[Contains("["), Contains("]")]),
        category: Category::Error,
        claims_closing_line: false,
    },
    BlockSpec {
        kind: BlockKind::ClassPath,
        requires: None,
        opener: EndsWith("CLASSPATH="),
        closer: Not(&PATH_ENTRY),
        category: Category::Info,
        claims_closing_line: false,
    },
    BlockSpec {
        kind: BlockKind::ConfigPath,
        requires: None,
        opener: EndsWith("CONFIGPATH="),
        closer: Not(&PATH_ENTRY),
        category: Category::Info,
        claims_closing_line: false,
    },
];

/// Detector flags and server identity, persisted for the life of a stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectorState {
    thread_dump: bool,
    blocks: [bool; 8],
    server: ServerType,
}

impl DetectorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server product identified so far.
    pub fn server(&self) -> ServerType {
        self.server
    }

    /// Inside a `Full thread dump` that has not reached its last thread.
    pub fn in_thread_dump(&self) -> bool {
        self.thread_dump
    }

    pub fn is_active(&self, kind: BlockKind) -> bool {
        self.blocks[kind.index()]
    }

    /// Blocks currently open, in evaluation order.
    pub fn active_blocks(&self) -> Vec<BlockKind> {
        BlockKind::ALL
            .into_iter()
            .filter(|kind| self.is_active(*kind))
            .collect()
    }

    /// Record the server type. Once identified it never changes; returns
    /// whether this call set it.
    pub fn identify_server(&mut self, server: ServerType) -> bool {
        if self.server != ServerType::Unknown || server == ServerType::Unknown {
            return false;
        }
        debug!("Identified application server: {:?}", server);
        self.server = server;
        true
    }

    /// Thread dumps outrank every other rule. Returns `Some(Info)` for lines
    /// inside a dump and for the dump's final thread line.
    pub(crate) fn track_thread_dump(&mut self, trimmed: &str) -> Option<Category> {
        if THREAD_DUMP_END.matches(trimmed) {
            if self.thread_dump {
                debug!("Thread dump finished");
            }
            self.thread_dump = false;
            return Some(Category::Info);
        }

        if !self.thread_dump && THREAD_DUMP_START.matches(trimmed) {
            debug!("Thread dump started");
            self.thread_dump = true;
        }

        self.thread_dump.then_some(Category::Info)
    }

    /// Inspect banner lines until the server type is known. Never decides
    /// the line's category.
    pub(crate) fn sniff_server(&mut self, trimmed: &str) {
        if self.server != ServerType::Unknown {
            return;
        }
        if let Some((server, _)) = SERVER_SIGNATURES
            .iter()
            .find(|(_, signature)| signature.matches(trimmed))
        {
            self.identify_server(*server);
        }
    }

    /// Run every block detector in order. The first block that claims the
    /// line decides its category.
    pub(crate) fn track_blocks(&mut self, trimmed: &str) -> Option<Category> {
        for spec in &BLOCKS {
            let applies = spec.requires.is_none_or(|server| server == self.server);
            let slot = spec.kind.index();

            if !self.blocks[slot] {
                if applies && spec.opener.matches(trimmed) {
                    debug!("Opened {} block", spec.kind.name());
                    self.blocks[slot] = true;
                }
            } else if applies && spec.closer.matches(trimmed) {
                debug!("Closed {} block", spec.kind.name());
                self.blocks[slot] = false;
                if spec.claims_closing_line {
                    return Some(spec.category);
                }
            }

            if self.blocks[slot] {
                return Some(spec.category);
            }
        }
        None
    }
}
