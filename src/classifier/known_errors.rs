//! Tables of known ATG and application server failure messages
//!
//! Most ATG errors are logged without a reliable level marker, so the
//! classifier falls back to recognizing the message text itself. The phrases
//! below come from ATG resource bundles (repository, deployment, Nucleus
//! servlet) plus common JDBC and web service failures.
//!
//! Entries are literal and case-sensitive. Order does not matter within a
//! table, but a line matching both tables is an error, since the error table
//! is consulted first.

use super::matcher::{any_match, Matcher, Matcher::*};

/// Messages that always mark a line as an error.
pub static KNOWN_ERRORS: &[Matcher] = &[
    // repository and query API
    Contains("Ids cannot be null"),
    Contains("Ids cannot be empty"),
    Contains("Attempt to add a NULL item to the repository"),
    Contains("Attempt to add an item to the repository without specifying"),
    Contains("Invalid data type name:"),
    Contains("Invalid item class name"),
    Contains("Invalid item descriptor name"),
    All(&[Contains("No property named"), Contains("could be found in the item descriptor")]),
    All(&[Contains("No item with ID"), Contains("could be found in item descriptor")]),
    Contains("is not queryable and thus cannot be used in this query"),
    Contains("Error initializing id generator"),
    Contains("Error reading list or array index from the database"),
    Contains("Attempt to create a sub-property query expression for the property"),
    Contains("Attempt to create a query using transient property"),
    Contains("Attempt to create a case-insenstive query with no SQL"),
    Contains("does not appear to be defined correctly in the database"),
    Contains("Query or QueryExpression object that is null or was not created by this repository"),
    Contains("invalid array of Query objects"),
    All(&[Contains("The argument"), Contains("cannot be null")]),
    Contains("Multi-valued properties may not be used"),
    Contains("using QueryExpressions that cannot be compared"),
    Contains("No default properties are defained"),
    All(&[Contains("The query operator"), Contains("is invalid")]),
    Contains("Attempt to execute a query with pQueryOptions = null"),
    Contains("SQL Repository not configured with DatabaseTableInfos"),
    Contains("Could not remove entry or entries for item descriptor"),
    Contains("An SQL error was encountered"),
    Contains("Unable to decode composite ID"),
    Contains("has incorrectly configured IdSpaces"),
    Contains("Id values must match Id column count"),
    Contains("Unable to set Id values of table"),
    Contains("Attempt to execute or build a text comparison query"),
    All(&[Contains("Unable to convert ID"), Contains("to type")]),
    Contains("Unable to convert composite ID element"),
    Contains("Unable to initialize stored procedure helper"),
    All(&[Contains("Arguments were provided for the query"), Contains("which does not contain parameters")]),
    Contains("Invalid parameter type passed to query"),
    Contains("Unable to rebuild this expression."),
    Contains("No arguments supplied for the parameter query"),
    Contains("Wrong number of arguments supplied for parameter query"),
    Contains("Null return property specified for query"),
    Contains("is not readable, and cannot be specified "),
    Contains("is not a GSA property, and cannot be specified"),
    Contains("is transient, and cannot be a return property"),
    Contains("is multi-valued, and cannot be a return property"),
    Contains("Null dependent property specified"),
    Contains("Null or blank sql string argument entered for DirectSqlQuery"),
    Contains("Unable to create a DirectSqlQuery against a transient item descriptor"),
    All(&[Contains("Unable to load class"), Contains("for input parameter at index")]),
    Contains("Invalid parameter type at index"),
    Contains("Error initializing sql query"),
    Contains("Error parsing template"),
    Contains("No template files defined, be sure the property"),
    Contains("Unable to read template file"),
    Contains("No XML parser could be found"),
    Contains("Unable to find the id space"),
    Contains("Invalid protocol magic number read"),
    Contains("Exception while reading events from data input stream"),
    Contains("No current transaction for getPropertyValue()"),
    Contains("Error setting the RQL filter string"),
    Contains("Unable to load database meta data for columns in table"),
    Contains("Attempt to perform a Sybase full text search query on property"),
    Contains("Attempt to perform a DB2 full text search query on property"),
    Contains("Attempt to set value of property"),
    Contains("An error occurred processing an invalidate cache entry"),

    Contains("*** failed to clone super-type"),
    Contains("can't read properties"),
    Contains("unkown bean:"),
    Contains("can't introspect property:"),
    Contains("unkown property:"),
    Contains("can't set property:"),
    Contains("Naming Exception caught"),
    Contains("Error: caught exception"),

    Contains("no getter for:"),
    Contains("NumberFormatException reading schema info cache"),
    Contains("does not exist in a table space accessible by the data source"),
    Contains("Found a one-to-many shared table definition in versioned case with one side using"),
    Contains("Found shared table definition in versioned case with only one asset version column"),

    // deployment server
    Contains("Error parsing file"),
    Contains("deployment topology failed to load properly"),
    Contains("no JNDI name defined for JNDI transport of agent"),
    Contains("no transport found for JNDI name"),
    Contains("error looking up transport"),
    Contains("no targets defined in topology definition file"),
    Contains("no transport defined for agent"),
    Contains("no transport type defined for agent"),
    Contains("unknown transport type"),
    Contains("no URI defined for RMI transport of agent"),
    Contains("could not instantiate RMI server-side agent transport with URI"),
    Contains("to an indeterminate snapshot due to an interruption in the committed apply phase"),
    Contains("Simulating failure : DeploymentAgent.debugApplyFailIndex is set to"),
    Contains("Manifest application aborted at server request"),
    Contains("An error was encountered applying manifest data before any data was committed"),
    Contains("Data store switch preparation aborted at server request"),
    Contains("is either not configured or failed to start up properly"),
    Contains("The version manager is either not configured or failed to start up properly"),
    Contains("The manifest manager is either not configured or failed to start up properly"),
    Contains("The transaction manager is either not configured or failed to start up properly"),
    Contains("The rmi server is either not configured or failed to start up properly"),
    Contains("The topology manager is either not configured or failed to start up properly"),
    Contains("The deployment server failed to start-up properly"),
    Contains("received unknown deployment command"),
    Contains("forcing initialization of snapshot from"),
    Contains("cannot initialize snapshot, the agent is either active or already has an snapshot"),
    Contains("because the agent is inaccessible"),
    Contains("agent is locked by a different deployment"),
    Contains("deployment server system version does not match this agent"),
    Contains("attempt to resume or rollback a deployment on this agent but the agent has been changed by another deployment"),
    Contains("only full deployments are allowed when the agent snapshot is uninitialized"),
    Contains("was not found on the local agent"),
    All(&[Contains("cannot enter phase"), Contains("from phase")]),
    Contains("could not get manifest stream for writing manifest"),
    Contains("manifest stream is null for install of manifest"),
    Contains("error closing manifest stream : stream is being ignored"),
    Contains("A maintained Status object could not be cloned to create a safe copy to return"),
    Contains("A maintained Status could not write to file"),
    Contains("could not delete Status file"),
    Contains("error encountered reading in persisted status"),
    Contains("cannot interrupt a deployment in state"),
    Contains("A system error was encountered trying to lookup the RMI URI"),
    Contains("transport error from agent"),
    Contains("transport failed to start or is otherwise uninitialized"),
    Contains("could not send manifest to agent"),
    Contains("error reading manifest stream"),
    Contains("transport error installing manifest on agent"),
    Contains("error closing manifest stream"),
    Contains("deployment server is starting up with an uninitialized topology"),
    Contains("no topology XML configured"),
    Contains("could not remove completed deployment"),
    Contains("topology cannot reinit due to deployment"),
    Contains("error closing agent transport for target"),
    Contains("recovered deployment status is either not from this server"),
    Contains("there is a target with no name : each target must be named"),
    Contains("no agents were given deployment responsibilities in target"),
    Contains("no agents defined in target"),
    Contains("there is an agent with no name in target"),
    Contains("due to error from transport"),
    Contains("suggesting an unclean shutdown"),
    Contains("hard reset requested from user"),
    Contains("mis-match in live data store name of switchable data stores"),
    Contains("error encountered reverting deployment switch"),
    Contains("error encountered preparing switchable for switch"),
    Contains("all files not deleted from"),
    Contains("cannot initialize snapshot on target"),
    Contains("forcing initialization of snapshot on target"),
    Contains("due to error from agent"),
    Contains("could not discern snapshot due to error from target"),
    Contains("error mismatch in snapshot on target"),
    Contains("has a current deployment that cannot be removed"),
    Contains("error recovering deployment from status"),
    Contains("cannot be instantiated because the deployment target"),
    Contains("An unidentified deployment cannot be instantiated due to errors"),
    Contains("cannot be instantiated due to errors accessing the repository"),
    Contains("An error occurred attempting to move deployment"),
    Contains("a repository level error occurred during deployment initialization"),
    Contains("An error occurred attempting to delete deployment"),
    Contains("A transaction-level error occurred while trying to delete deployment"),
    Contains("encountered a transaction-level error while preparing Target"),
    Contains("cannot be started because there is already a current deployment"),
    Contains("could not be made the current deployment in order to start it"),
    Contains("the deployment is flagged as a revert but has more than one project"),
    Contains("the target has no initial snapshot"),
    Contains("should have a Snapshot by now but does not"),
    Contains("encountered a versioning error building the manifest"),
    Contains("encountered a system level deployment error during data transfer"),
    Contains("No destination repositories or virtual file systems were configured for this deployment"),
    Contains("could not be resolved as a Nucleus component"),
    Contains("The source virtual file system could not be found for the following file asset"),
    Contains("encountered an error with manifest"),
    Contains("A call to the current deployment running remotely on another deployment server"),
    Contains("is no longer the current deployment and thus could not be called"),
    Contains("An RMI error encountered calling remote current deployment"),
    Contains("but could find no such manifest"),
    Contains("cannot be started, either it was previously started or the deployment queue is running and this deployment is not next in the queue."),
    Contains("cannot stop a deployment that is in a non-active or non-error state"),
    Contains("since the deployment has not stopped due to an error"),
    Contains("the deployment has started and must either complete successfully or be stopped in order to be deleted"),
    Contains("unrecognized deployment type"),
    Contains("cannot be found in the VersionManager : full deployment is required"),
    Contains("cannot perform an online deployment on target"),
    Contains("cannot perform an incremental deployment on target"),
    Contains("error communicating with target:agent"),
    Contains("could not lock target:agent"),
    Contains("error preparing target:agent"),
    Contains("error loading manifest on target:agent"),
    Contains("error installing manifest on target:agent"),
    Contains("error applying manifest on target:agent"),
    Contains("error activating deployment on target:agent"),
    Contains("event interrupt on target:agent"),
    Contains("error from target:agent"),
    Contains("Unexpected error occured. See log for details."),
    Contains("do not have the same live data store : "),
    Contains("Cannot deploy to target"),
    Contains("does not match current target snapshot : "),
    Contains("unexpected state returned telling target:agent"),
    Contains("transport error unlocking target:agent"),
    Contains("error stopping deployment on target:agent"),
    Contains("agent errors encountered while stopping deployment"),
    Contains("error deleting manifest"),
    Contains("agent errors encountered while deleting manifests"),
    Contains("Deployment manifests could not be deleted from the agent"),
    Contains("encountered an exception while loading"),
    Contains("An exception was encountered while installing Manifest"),
    Contains("An exception was encountered switching data stores"),
    Contains("An exception was encountered sending update events to affected VirtualFileSystems"),
    Contains("runtime exception caught from event listener"),
    Contains("Failed to connect to agent "),
    Contains("This agent not allowed to be absent for a deployment"),
    Contains("error resolving CMS catalog for deployment checks"),
    Contains("error updating foreign repository references"),
    Contains("Running deployment cannot be changed"),
    Contains("error resetting shadow"),
    Contains("Target is already initialized with a snapshot"),
    Contains("has pending or current deployment. It cannot be deleted or updated"),
    Contains("The name was given as a branch from which to initialize the new target branch"),
    Contains("When creating a new target the source target to initialize from is required"),
    Contains("cannot be deleted.  It is choosen to act as an initialization source"),
    Contains("Target preparation failed because the one-time server-side target initialization encountered an error"),
    Contains("due to lower level errors"),
    Contains("could not be found in the version manager for rollback"),
    Contains("because the Project is not checked in and does not have locked assets"),
    Contains("as a new Project because the Project has already been deployed to the target"),
    Contains("A system level error "),
    Contains("could not be found in the Publishing repository."),
    Contains("A transaction-level error occurring while trying to create a"),
    Contains("cannot be back-deployed to Project"),
    Contains("cannot revert a null Project"),
    Contains("cannot revert Project ID"),
    Contains("Exception encountered while trying to revert Project"),
    Contains("A transaction-level error occurring while trying to revert Project"),
    Contains("but there is no merge workspace associated with the project"),
    Contains("is marked as completed but the workspace, for the workspace name associated with it"),
    Contains("cannot be started : Target site"),
    Contains("cannot be reverted from deployment target site"),
    Contains("A transaction-level error occurring while trying to initialize Target site"),
    Contains("could not find snapshot"),
    Contains("internal error: unexpected diff from version manager"),
    Contains("must have exactly two underlying data sources to be used for deployment"),
    Contains("not a GSARepository. Instead it is of type:"),
    Contains("error creating shadow for:"),
    Contains("not a VirtualFileSystem. Instead it is of type:"),
    Contains("cannot create temp file:"),
    Contains("no manifest manager at"),
    Contains("no transaction manager at"),
    Contains("no version manager at"),
    Contains("no repository registry a"),
    Contains("no repository at "),
    Contains("invalid starting index:"),
    Contains("invalid ending index:"),
    Contains("batch size must be either -1 or a postive integer"),
    Contains("unrecognized argument: "),
    Contains("you must specify a data file"),
    Contains("you must specifiy at least one repository or -all for exports"),
    Contains("does not appear to be valid data file"),
    Contains("internal error reserving the id for the repository item"),
    Contains("attempt to export the versioned repository"),
    Contains("I/O error creating deferred update store"),
    Contains("I/O error writing int value"),
    Contains("could not find repository service"),
    Contains("could not find item descriptor"),
    Contains("could not find virtual file system"),
    Contains("no snapshot diff returned for"),
    Contains("internal error: unrecognized deployment type:"),
    Contains("A deployment cannot be created without a project."),
    Contains("Cannot revert project"),
    Contains("An error occurred while importing topology"),
    Contains("Error occurred while invalidating the destination repository caches."),
    Contains("No target repository mapping defined for"),
    All(&[Contains("state change"), Contains("received event interrupted from")]),
    All(&[Contains("data file"), Contains("does not exist")]),
    All(&[Contains("invalid value"), Contains("for argument:")]),
    All(&[Contains("The deploy time of Deployment"), Contains("could not be changed to")]),
    All(&[Contains("for target"), Contains("cannot be started twice")]),
    All(&[Contains("Snapshot"), Contains("could not be retrieved for Project")]),
    All(&[Contains("Project with ID"), Contains("is required to deploy Project(s)")]),
    All(&[Contains("requested destination"), Contains("not found")]),
    All(&[Contains("data source for repository:"), Contains("is not a switching data source")]),
    All(&[Contains("data file"), Contains("is not readable")]),
    All(&[Contains("data file"), Contains("is not writable")]),
    Contains("The connection pool failed to initialize propertly"),
    All(&[Contains("The suppplied DataSource JNDI name"), Contains("did not resolve to a DataSource")]),
    Contains("No Transaction could be found or created for the current thread"),
    Contains("failed to obtain the current Transaction from the TransactionManager"),
    Contains("transaction demarcation should be controled through JTA interfaces"),
    Contains("the currentDataSource property is NULL"),
    Contains("the dataSources property is NULL or contains no data sources"),
    Contains("is not recognized as the name of one of the data sources configured for this SwitchingDataSource"),
    Contains("mis-match between Transaction and Connection : FakeXA forces"),
    Contains("attempting to use a closed connection"),
    Contains("error reclaiming resource"),
    Contains("Synchronization detected probable missing Connection.close()"),

    // repository XML parser
    Contains(" has parsing errors."),
    Contains("Fatal error parsing file"),
    Contains("Warning parsing file "),
    Contains("File contains duplicate definition of item-descriptor "),
    Contains("You must supply an item-descriptor attribute for the print-item tag"),
    Contains("You supplied an invalid item-descriptor"),
    Contains("should not have both super-type and copy-from attributes"),
    Contains("has an invalid item-descriptor for the super-type attribute"),
    Contains("has an invalid item-descriptor for the copy-from attribute"),
    Contains("must specify a valid property name for the sub-type-property attribute"),
    Contains("must specify a property for the sub-type-property"),
    Contains("must specify a valid property for the display-property attribute"),
    Contains("must specify a valid property for the version-property attribute"),
    Contains("must specify valid properties for the text-search-properties attribute"),
    Contains("must specify a valid integer for the cache-size attribute"),
    Contains("must specify a valid integer for the cache-timeout attribute"),
    Contains("must have a table tag with type="),
    Contains("cannot have the sub-type-property attribute on it"),
    Contains("but is missing at least one of content-property, folder-id-property, or one of content-name-property"),
    Contains("but is missing at least one of folder-id-property, or one of content-name-property, content-path-property"),
    Contains("has a version-property which is not a number type."),
    All(&[Contains("Your attribute "), Contains("refers to a non-existent property")]),
    Contains("refers to a property that is not a repository property descriptor"),
    Contains("must have type attribute of primary, auxiliary, or multi.  You have"),
    Contains("which is not a sub-class of GSAPropertyDescriptor."),
    Contains("has a property whose data-type is not valid for a multi table:"),
    Contains("is missing an item-descriptor."),
    Contains("is missing an id-column-name attribute."),
    Contains("specifies an invalid foreign repository name"),
    Contains("only specify one of the attributes item-type or data-type(s), not both"),
    Contains("specifies both component-item-type and component-data-type attributes"),
    Contains("specifies a repository attribute which is only valid for properties with"),
    Contains("has an invalid property-type"),
    Contains("has an invalid data type "),
    Contains("is missing one of the component-data-type"),
    Contains("specifies an invalid item-descriptor"),
    Contains("specifies a value for both component-data-type and"),
    Contains("specifies an invalid value for the component-data-type attribute"),
    Contains("specifies an invalid item-type"),
    Contains("is improperly defined according to"),
    Contains(".  Using default property editor."),
    All(&[Contains("insert,update,delete"), Contains("but does not refer to another item.")]),
    All(&[Contains("delete,insert"), Contains("and refers to a item which has a property that refers back")]),
    Contains("All entries should be insert,update or delete."),
    Contains("specifies a column-name property but is not inside of a table tag."),
    Contains("specifies the group attribute but is not defined inside of a table tag"),
    Contains("specifies the default attribute but is not a scalar property."),
    Contains("is a scalar property but is defined in a table tag with type="),
    Contains("is a set but also specifies a multi-column-name"),
    Contains(" is missing the multi-column-name attribute."),
    Contains(" must have either a component-item-type or component-data-type attribute."),
    Contains("is a multi-valued property defined in a table that does not have type="),
    Contains("sets a cache-mode that is not supported on property tags"),
    Contains("has some option tags which set the code value and others which do not set it explicitly"),
    Contains("specifies a code value which is not a valid integer."),
    Contains("specifies an option code or value more than once:"),
    Contains("already has an attribute tag with name"),
    Contains("specifies an invalid data-type for an attribute tag"),
    Contains("specifies an invalid value for an attribute tag."),
    Contains("Detailed error: "),
    Contains("is not a valid data-type."),
    Contains(" could not be converted to the type "),
    Contains("attribute with an invalid bean attribute."),
    Contains("has an attribute with a null bean value "),
    Contains("item-descriptor tag does not have a valid name:"),
    Contains("You have two item-descriptor tags with default="),
    All(&[Contains("in item-descriptor"), Contains("You have two properties called ")]),
    Contains("Error trying to set an id generator high water mark:"),
    Contains(" is an illegal value for the sub-type-property."),
    Contains(" has two id properties specified."),
    Contains("Specify either value or bean, but not both."),
    Contains("so the data-type attribute is not meaningful when "),
    Contains("Invalid tag value: "),
    Contains("Invalid composite format for repository ID:"),
    Contains("This item type does not support composite repository IDs:"),
    Contains("You specified both attributes id-column-name and id-column-names for table"),
    Contains("You must specify either id-column-name or id-column-names for table element"),
    Contains("You specified both attributes id-space-name and id-space-names for descriptor"),
    Contains("The parsed ID has values that do not correspond to the configured id-space-names:"),
    Contains("was specified with multiple columns. It will be treated as a read-only property"),
    Contains("was specified with multiple columns. It must either share all or none of"),
    Contains("Failed to add item to repository:"),
    All(&[Contains("must both be versioning."), Contains("Your item-descriptor definitions for")]),
    Contains("Please specify the desired range when calling"),
    Contains("This repository may not yet be properly initialized."),

    Contains("You must specify an XML configuration template file"),
    Contains("You must specify a repository"),
    Contains("You must specify an XMLTools object"),
    Contains("Secured repository failed to start"),
    Contains("There are no secured-repository-template elements"),
    Contains("Invalid/unknown identity:"),
    Contains("Invalid/unknown access right:"),
    Contains("Invalid/unknown owner identity:"),
    Contains("Invalid access control list:"),
    Contains("An item descriptor name must be specified"),
    Contains("is not a configured item descriptor of the repository"),
    Contains("A property name must be specified"),
    Contains("is not a configured property of the repository item"),
    Contains("An error occurred while evaluating function"),
    Contains("No function is mapped to the name"),
    Contains("An error occurred while parsing custom action attribute"),
    Contains("No such implicit object"),
    Contains("An exception occurred while trying to compare a value of"),
    Contains("An error occurred obtaining the indexed property value of an"),
    Contains("Unable to find a value for name"),
    Contains("An error occurred calling equals() on an object of type"),
    Contains("An error occurred applying operator"),
    Contains("Unable to parse value "),
    Contains("but there is no PropertyEditor for that type"),
    Contains("An exception occurred trying to convert String"),
    Contains("Attempt to coerce "),
    Contains("threw an exception in its toString()"),
    Contains("Unable to find a value for"),
    Contains("An exception occurred while trying to "),
    Contains("that value cannot be converted to an integer."),
    Contains("operator may not be null"),
    Contains("Attempt to apply a null index to the"),
    Contains("An error occurred while getting property"),
    Contains("does not have a public getter method"),
    Contains("Attempt to get property"),
    Contains("A null expression string may not be passed to the"),
    Contains("An Exception occurred getting the BeanInfo for class"),
    Contains("An attempt was made to register two Home"),
    Contains("Failed to delete file"),
    Contains("Did not successfully copy file"),
    Contains("IOException received while copying or checking file"),
    Contains("Error received while performing operation"),
    Contains("Unable to extract data from cache data file"),
    Contains("IOException received while operating on cache data file"),
    Contains("Incorrect format for checksum file cache line"),
    Contains("Checksum cache file nonexistent during load.  If you see this warning repeatedly"),
    Contains("Null file passed to checksum cache"),
    Contains("File System is immutable. Cannot create new file."),
    Contains("Invalidate transAttribute value"),
    Contains("Registry is Not Defined"),
    Contains("Missing the Security Configuration"),
    Contains("Missing Default Access Control List"),
    Contains("unknown JDBC types for property"),

    // Nucleus servlet startup
    Contains("***** ERROR:  Could not get ServletContext for atg_bootstrap.war"),
    Contains("Failing NucleusServlet startup"),
    Contains("Nucleus was not properly initialized"),
    Contains("RuntimeException caught by proxy servlet"),
    Contains("NucleusServlet: Could not load class"),
    Contains("NucleusServlet: Could not instantiate class"),
    Contains("NucleusServlet: IllegalAccessException while invoking initializer"),
    Contains("NucleusServlet: NoSuchMethodException while invoking initializer"),
    Contains("NucleusServlet: InvocationTargetException while invoking initializer"),
    Contains("Cannot determine Nucleus configpath root."),
    Contains("NucleusServlet: can't set init properties"),
    Contains("ERROR: no system nucleus after launching"),
    Contains("Nucleus failed to start"),
    Contains("Error spawning a local nucleus for context"),
    Contains("Error stopping nucleus"),
    Contains("Could not get the class for the JBoss TransactionManagerFactory"),
    Contains("does not have a method named"),
    Contains("Could not get the class for the IBM TransactionManagerFactory"),
    Contains("Error encountered while initializing Nucleus servlet"),

    Contains("adding form exception:"),
    Contains("SystemErr     R \tat "),

    Contains("An error occurred at line:"),
    Contains("Generated servlet error:"),
    Contains("could not be found. Please ensure that the JNDI name in the weblogic-ejb-jar.xml"),
    StartsWith("Caught exception in "),
    Contains("Marking this deployment as FAILED"),
    Contains("Invalid object name '"),
    Contains("Can't find element with id="),
    Contains("*** unable to find GSARepository component:"),
    Contains("Nested exception is:"),
    Contains("OutOfMemoryException"),
    EndsWith(" cannot be resolved"),
    StartsWith("Error:"),
    StartsWith("log4j:ERROR"),
    Contains("ERROR:"),
    StartsWith("Nested Exception is"),
    Contains("message = Deployment Failed time"),
    Contains("atg.deployment.DeploymentFailure@"),
    Contains("has more than one primary table defined"),
    Contains("specifies a component-item-type or component-data-type attribute for a single value property"),
    Contains("has super-type product but no sub-type attribute"),
    StartsWith("Stacktrace:"),
    Contains("Ensure that the first WebLogic Server is completely shutdown and restart the server"),
    Contains("The WebLogic Server did not start up properly."),
    Contains("[STDOUT] java.lang.OutOfMemoryError"),
    Contains("[STDOUT] AxisFault"),
    StartsWith("faultCode:"),
    EndsWith("faultSubcode:"),
    EndsWith("faultActor:"),
    StartsWith("faultString:"),
    StartsWith("AxisFault"),
    StartsWith("Fault occurred in processing"),
    EndsWith("faultNode:"),
    EndsWith("faultDetail:"),
];

/// Messages that mark a line as a warning when no error phrase matched.
pub static KNOWN_WARNINGS: &[Matcher] = &[
    StartsWith("log4j:WARN"),
    Contains("There was a problem sending an invalidation event"),
    Contains("*** WARNING: Unqualified driver"),
    StartsWith("Warning:"),
    Contains("is not in the safe list"),
    Contains("Found nullable timestamp column"),
    Contains("was not found in the set of columns returned"),
    Contains("Found non-null ManyToOneMultiProperty"),
    Contains("Found unrecognized many-to-one relationship in table"),
    Contains("Found one to one definition in versioned case with both sides using a primary table"),
    Contains("Warning - table"),
    Contains("Missing a src id property in item-descriptor"),
    Contains("Missing a dst id property in item-descriptor"),
    Contains("Missing a dst multi property in item-descriptor"),
    All(&[Contains("The property in item-descriptor"), Contains("is read only.")]),
    Contains("found more than one agent status : using most recent status : older Status"),
    Contains("getConnection() should be used instead of this method"),
    Contains("Connection.close() should be used instead of this method"),
    All(&[Contains("directory"), Contains("could not be created")]),
    All(&[Contains("Encountered"), Contains("expected one of")]),
    All(&[Contains("Class"), Contains("does not have a property")]),
    All(&[Contains("Attempt to apply the"), Contains("operator to a null value")]),
    All(&[Contains("Attempt to apply operator"), Contains("to arguments of type")]),
    All(&[Contains("Attempt to apply operator"), Contains("to null value")]),
    All(&[Contains("The function"), Contains("requires"), Contains("arguments but was passed")]),

    // Nucleus servlet startup
    Contains("***** WARNING:  System property"),
    Contains("***** WARNING: atg_bootstrap.war may not have started first"),
    Contains("***** WARNING: Context name (context-root) of the atg_bootstrap.war was"),
    Contains("WARNING: Unsupported application server"),
    Contains("WARNING: Warning from ejbc"),
    Contains("WARNING:"),
    Contains("ATG application EAR file launched in development mode"),
];

/// True when `trimmed` contains a known error phrase.
pub fn is_known_error(trimmed: &str) -> bool {
    any_match(KNOWN_ERRORS, trimmed)
}

/// True when `trimmed` contains a known warning phrase.
pub fn is_known_warning(trimmed: &str) -> bool {
    any_match(KNOWN_WARNINGS, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::matcher::first_duplicate;

    #[test]
    fn test_tables_have_no_duplicates() {
        assert_eq!(first_duplicate(KNOWN_ERRORS), None);
        assert_eq!(first_duplicate(KNOWN_WARNINGS), None);
    }

    #[test]
    fn test_known_error_phrases() {
        assert!(is_known_error(
            "**** Error\tThu Apr 12 10:00:00 EDT 2007\t/atg/dynamo/service/jdbc/JTDataSource\tNo item with ID 1234 could be found in item descriptor user"
        ));
        assert!(is_known_error("AxisFault"));
        assert!(is_known_error("  faultDetail:"));
        assert!(is_known_error("log4j:ERROR Could not find value for key"));
        assert!(!is_known_error("No item with ID 1234"));
        assert!(!is_known_error("everything is fine"));
    }

    #[test]
    fn test_known_warning_phrases() {
        assert!(is_known_warning("log4j:WARN No appenders could be found"));
        assert!(is_known_warning(
            "Attempt to apply operator + to arguments of type String"
        ));
        assert!(is_known_warning("The function max requires 2 arguments but was passed 3"));
        assert!(!is_known_warning("The function max requires 2"));
    }

    #[test]
    fn test_conjunction_entries_need_every_part() {
        for entry in KNOWN_ERRORS.iter().chain(KNOWN_WARNINGS) {
            let All(parts) = entry else { continue };
            assert!(parts.len() >= 2, "{entry:?}");

            let literals: Vec<&str> = parts
                .iter()
                .filter_map(|p| match p {
                    Contains(text) => Some(*text),
                    _ => None,
                })
                .collect();
            assert!(entry.matches(&literals.join(" ... ")), "{entry:?}");
            assert!(!entry.matches(literals[0]), "{entry:?}");
        }
    }
}
