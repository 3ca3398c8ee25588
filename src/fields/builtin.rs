//! Builtin alias table: the APM field-name mapping for transaction, span and
//! error event documents. Used when no alias file is given.

use crate::fields::aliases::{AliasTable, AliasesSpec, RawAlias};

/// Alias -> dotted path, covering the common envelope plus the
/// transaction/span/error substructures.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("timestamp", "@timestamp"),
    ("agentName", "agent.name"),
    ("agentVersion", "agent.version"),
    ("httpRequestMethod", "http.request.method"),
    ("httpResponseStatusCode", "http.response.status_code"),
    ("urlFull", "url.full"),
    ("serviceName", "service.name"),
    ("serviceLanguageName", "service.language.name"),
    ("serviceLanguageVersion", "service.language.version"),
    ("hostHostname", "host.hostname"),
    ("processorName", "processor.name"),
    ("processorEvent", "processor.event"),
    ("timestampUs", "timestamp.us"),
    ("traceId", "trace.id"),
    ("userId", "user.id"),
    ("parentId", "parent.id"),
    ("kubernetesPodUid", "kubernetes.pod.uid"),
    ("containerId", "container.id"),
    ("transactionDurationUs", "transaction.duration.us"),
    ("transactionId", "transaction.id"),
    ("transactionName", "transaction.name"),
    ("transactionResult", "transaction.result"),
    ("transactionSampled", "transaction.sampled"),
    ("transactionType", "transaction.type"),
    ("spanAction", "span.action"),
    ("spanDurationUs", "span.duration.us"),
    ("spanId", "span.id"),
    ("spanName", "span.name"),
    ("spanSubtype", "span.subtype"),
    ("spanSync", "span.sync"),
    ("spanType", "span.type"),
    ("dbStatement", "context.db.statement"),
    ("errorCulprit", "error.culprit"),
    ("errorId", "error.id"),
    ("errorGroupingKey", "error.grouping_key"),
    ("errorExceptionMessage", "error.exception[0].message"),
    ("errorExceptionHandled", "error.exception[0].handled"),
    ("errorExceptionType", "error.exception[0].type"),
    ("errorLogMessage", "error.log.message"),
];

/// Build the builtin table through the same validation path as alias files,
/// so it cannot bypass the table invariants.
pub fn builtin_table() -> anyhow::Result<AliasTable> {
    let spec = AliasesSpec {
        aliases: BUILTIN_ALIASES
            .iter()
            .map(|(name, path)| RawAlias {
                name: (*name).to_string(),
                path: (*path).to_string(),
            })
            .collect(),
    };
    spec.validate_and_build()
}
