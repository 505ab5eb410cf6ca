use serde::Serialize;
use sqlx::{Postgres, Transaction};

use crate::db::DbPool;
use crate::error::Result;
use crate::qc::records::QcRecord;

/// Terminal state of one record in the synchronizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Empty primary key; no store call was made.
    Skipped,
    /// An existing row with this key was overwritten.
    Updated,
    /// No row had this key; a new one was created.
    Inserted,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SyncReport {
    /// Records durably written (updated + inserted). Skips don't count.
    pub processed: usize,
    pub updated: usize,
    pub inserted: usize,
    pub skipped: usize,
}

// `xmax = 0` holds only for rows freshly inserted by this statement,
// which is how we tell the two conflict branches apart.
const UPSERT_QC: &str = "\
INSERT INTO rna_qc_kinnex (rna_tube_id, rna_tube_id_2, read_count, run_id) \
VALUES ($1, $2, $3, $4) \
ON CONFLICT (rna_tube_id) DO UPDATE \
SET rna_tube_id_2 = EXCLUDED.rna_tube_id_2, \
    read_count    = EXCLUDED.read_count, \
    run_id        = EXCLUDED.run_id \
RETURNING (xmax = 0) AS inserted";

/// Reconciles a batch of QC records against `rna_qc_kinnex` inside a
/// single transaction. Reprocessing the same batch is idempotent: one
/// stored row per distinct `rna_tube_id`, last write wins. Any store
/// error aborts the whole batch; the transaction rolls back on drop, so
/// either every record in the batch is persisted or none is.
pub async fn push_qc_records(pool: &DbPool, records: &[QcRecord]) -> Result<SyncReport> {
    let mut tx = pool.begin().await?;
    let mut report = SyncReport::default();

    for record in records {
        match upsert_record(&mut tx, record).await? {
            SyncOutcome::Skipped => report.skipped += 1,
            SyncOutcome::Updated => {
                report.updated += 1;
                report.processed += 1;
            }
            SyncOutcome::Inserted => {
                report.inserted += 1;
                report.processed += 1;
            }
        }
    }

    tx.commit().await?;
    tracing::info!(
        processed = report.processed,
        updated = report.updated,
        inserted = report.inserted,
        skipped = report.skipped,
        "QC batch committed"
    );
    Ok(report)
}

async fn upsert_record(
    tx: &mut Transaction<'_, Postgres>,
    record: &QcRecord,
) -> Result<SyncOutcome> {
    let Some(tube_id) = record.rna_tube_id.as_deref() else {
        tracing::warn!("skipping QC record with empty rna_tube_id");
        return Ok(SyncOutcome::Skipped);
    };

    let inserted: bool = sqlx::query_scalar(UPSERT_QC)
        .bind(tube_id)
        .bind(record.rna_tube_id_2.as_deref())
        .bind(record.read_count)
        .bind(record.run_id.as_deref())
        .fetch_one(&mut **tx)
        .await?;

    Ok(if inserted {
        SyncOutcome::Inserted
    } else {
        SyncOutcome::Updated
    })
}
