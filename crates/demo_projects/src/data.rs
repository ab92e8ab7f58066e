//! Sample project-allocation records and their column schema.

use datagrid::column::Column;
use datagrid::row::Row;

/// One project offering in the allocation round.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub supervisor: String,
    pub capacity: u32,
    pub status: String,
}

impl Row for Project {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

/// Column schema for the allocation table.
pub fn project_columns() -> Vec<Column<Project>> {
    vec![
        Column::new("title", "Project", |p: &Project| p.title.clone())
            .width(36)
            .sorted_by_text()
            .no_hide(),
        Column::new("supervisor", "Supervisor", |p: &Project| {
            p.supervisor.clone()
        })
        .width(16)
        .sorted_by_text(),
        Column::new("capacity", "Capacity", |p: &Project| p.capacity.to_string())
            .width(8)
            .sorted_by(|a, b| a.capacity.cmp(&b.capacity)),
        Column::new("status", "Status", |p: &Project| p.status.clone()).width(10),
    ]
}

/// Sample rows for the demo.
pub fn sample_projects() -> Vec<Project> {
    let rows = [
        (1, "Real-Time Ray Tracing on Embedded GPUs", "Okafor", 2, "Open"),
        (2, "Verified Parsers for Network Protocols", "Lindqvist", 3, "Open"),
        (3, "Energy-Aware Thread Scheduling", "Okafor", 2, "Pending"),
        (4, "Incremental Build Systems at Scale", "Duarte", 4, "Open"),
        (5, "Gossip Protocols for Edge Clusters", "Lindqvist", 2, "Allocated"),
        (6, "Differentiable Audio Synthesis", "Marchetti", 3, "Open"),
        (7, "Cache-Oblivious Spatial Indexes", "Duarte", 2, "Open"),
        (8, "Privacy-Preserving Course Analytics", "Marchetti", 5, "Pending"),
        (9, "WASM Sandboxing for Plugin Systems", "Lindqvist", 3, "Open"),
        (10, "Self-Tuning Query Optimizers", "Duarte", 2, "Allocated"),
        (11, "Typed Configuration Languages", "Okafor", 4, "Open"),
        (12, "Probabilistic Program Testing", "Marchetti", 2, "Open"),
        (13, "Low-Latency Matching Engines", "Duarte", 3, "Pending"),
        (14, "Compiling Dataflow Graphs to FPGAs", "Okafor", 2, "Open"),
        (15, "Consensus Under Network Partitions", "Lindqvist", 4, "Open"),
        (16, "Streaming Joins over Sensor Data", "Duarte", 3, "Allocated"),
        (17, "Structured Editors for Proof Scripts", "Marchetti", 2, "Open"),
        (18, "Deterministic Replay for Async Runtimes", "Lindqvist", 2, "Open"),
    ];
    rows.into_iter()
        .map(|(id, title, supervisor, capacity, status)| Project {
            id,
            title: title.to_string(),
            supervisor: supervisor.to_string(),
            capacity,
            status: status.to_string(),
        })
        .collect()
}
