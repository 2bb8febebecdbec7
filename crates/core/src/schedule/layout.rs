//! # Overlap layout
//!
//! Assigns each session of a single date a column inside its time-slot row so
//! that sessions running at the same instant never share horizontal space.
//!
//! ## Algorithm
//!
//! 1. Records sharing an id are reduced to one (see [`distinct_sessions`]).
//!    Sessions with a missing or inverted interval are set aside. Each gets a
//!    flagged full-row slot and takes no further part in the layout.
//! 2. The remaining sessions are sorted by `(start_time, id)` and partitioned
//!    into clusters: connected components of the overlap graph.
//! 3. Inside a cluster, sessions are placed first-fit into the lowest column
//!    whose last session has already ended (`end <= start`). The number of
//!    columns opened equals the cluster's peak concurrency.
//! 4. A session in column `i` of a cluster `k` columns wide gets width `1/k`
//!    and left offset `i/k`.
//!
//! The result depends only on the set of sessions, not on their input order.

use std::collections::{btree_map::Entry, BTreeMap};

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::clusters::overlap_clusters;
use crate::models::{layout::LayoutSlot, session::Session};

/// Layout of one date, keyed by session id.
pub type SessionLayout = BTreeMap<Uuid, LayoutSlot>;

/// Computes the side-by-side layout for one date's sessions.
///
/// Never fails: invalid sessions are isolated into flagged full-row slots,
/// and an empty input yields an empty layout. When several records share an
/// id, only the one picked by [`distinct_sessions`] is laid out.
pub fn layout(sessions: &[Session]) -> SessionLayout {
    let mut result = SessionLayout::new();
    let mut valid: Vec<&Session> = Vec::with_capacity(sessions.len());

    for session in distinct_sessions(sessions) {
        if session.has_valid_interval() {
            valid.push(session);
        } else {
            warn!(
                session_id = %session.id,
                start_time = ?session.start_time,
                end_time = ?session.end_time,
                "Session has an invalid interval, isolating it"
            );
            result.insert(session.id, LayoutSlot::invalid(session.id));
        }
    }

    valid.sort_by_key(|session| (session.start_time, session.id));

    let clusters = overlap_clusters(&valid);
    let cluster_count = clusters.len();

    for cluster in clusters {
        let members: Vec<&Session> = cluster.iter().map(|&index| valid[index]).collect();
        let (columns, column_count) = assign_columns(&members);

        for (session, column) in members.iter().zip(columns) {
            result.insert(session.id, LayoutSlot::in_column(session.id, column, column_count));
        }
    }

    debug!(
        sessions = result.len(),
        clusters = cluster_count,
        invalid = result.len() - valid.len(),
        "Computed session layout"
    );

    result
}

/// Greedy first-fit column assignment for sessions sorted by start time.
///
/// Returns the column of each session, in input order, and the number of
/// columns used.
fn assign_columns(sessions: &[&Session]) -> (Vec<usize>, usize) {
    let mut column_ends: Vec<NaiveDateTime> = Vec::new();
    let mut columns = Vec::with_capacity(sessions.len());

    for session in sessions {
        let Some((start, end)) = session.interval() else {
            continue;
        };

        let column = match column_ends.iter().position(|&column_end| column_end <= start) {
            Some(free) => {
                column_ends[free] = end;
                free
            }
            None => {
                column_ends.push(end);
                column_ends.len() - 1
            }
        };
        columns.push(column);
    }

    (columns, column_ends.len())
}

/// Keeps one record per session id, in input order.
///
/// The survivor does not depend on where duplicates sit in the input: a
/// record with a valid interval beats one without, then the earliest
/// `(start_time, end_time)` wins, with the remaining fields as tie-breakers.
pub fn distinct_sessions(sessions: &[Session]) -> Vec<&Session> {
    let mut chosen: BTreeMap<Uuid, usize> = BTreeMap::new();

    for (index, session) in sessions.iter().enumerate() {
        match chosen.entry(session.id) {
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
            Entry::Occupied(mut entry) => {
                warn!(session_id = %session.id, "Duplicate session id in layout input");
                if preference(session) < preference(&sessions[*entry.get()]) {
                    entry.insert(index);
                }
            }
        }
    }

    sessions
        .iter()
        .enumerate()
        .filter(|(index, session)| chosen.get(&session.id) == Some(index))
        .map(|(_, session)| session)
        .collect()
}

type Preference<'a> = (
    bool,
    Option<NaiveDateTime>,
    Option<NaiveDateTime>,
    Uuid,
    Option<Uuid>,
    &'a str,
    Option<String>,
);

fn preference(session: &Session) -> Preference<'_> {
    (
        !session.has_valid_interval(),
        session.start_time,
        session.end_time,
        session.teacher_id,
        session.assistant_id,
        session.subject_type.as_str(),
        session.data.as_ref().map(Value::to_string),
    )
}
