//! Binary snapshot codec — the exact wire format that lets a parsed network
//! be reloaded in seconds rather than re-parsed from the source map.
//!
//! Layout (little-endian throughout):
//!
//! ```text
//! header (128 bytes): magic "OGRGRAPH", version:i32, node_count:i64,
//!                      edge_count:i64, bounds: 4×f64, has_bounds:i8, zero padding
//! string table: count:i32, then (id:i32, len:i32, utf8 bytes) per string
//! node records (24 bytes each): id:i64, lat:f64, lon:f64
//! edge records: id:i64, source:i64, target:i64, one_way:i8, distance:f64,
//!               7 zero-byte pad, tag_count:i32, then (key_id:i32, value_id:i32) per tag
//! ```
//!
//! A string id of `-1` denotes the absent string (reserved for nullable
//! fields; unused by tags, which always carry both a key and a value).

use std::io::{Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use route_core::{Coordinate, Distance, EdgeId, NodeId, RouteError, RouteResult};

use crate::graph::{Bounds, Graph};

const MAGIC: &[u8; 8] = b"OGRGRAPH";
const VERSION: i32 = 1;
const HEADER_SIZE: usize = 128;
/// magic + version + node_count + edge_count + bounds(4×f64) + has_bounds:i8
const HEADER_FIXED_SIZE: usize = 8 + 4 + 8 + 8 + 4 * 8 + 1;
const HEADER_PADDING: usize = HEADER_SIZE - HEADER_FIXED_SIZE;
const EDGE_FIXED_PADDING: usize = 7;

const ABSENT_STRING: i32 = -1;

type ProgressFn<'a> = dyn FnMut(&str, f64) + 'a;

fn fail(path: &str, message: impl Into<String>) -> RouteError {
    RouteError::GraphLoaderFailed { path: path.to_string(), message: message.into() }
}

fn io_fail(path: &str, e: std::io::Error) -> RouteError {
    fail(path, e.to_string())
}

fn report(progress: &mut Option<&mut ProgressFn<'_>>, message: &str, fraction: f64) {
    if let Some(cb) = progress.as_mut() {
        cb(message, fraction);
        tracing::info!(fraction, message, "graph snapshot progress");
    }
}

/// Serialize `graph` to `writer`. String tags are interned into a table
/// sorted by content so repeated writes of an unchanged graph produce
/// byte-identical output.
pub fn write_graph<W: Write>(graph: &Graph, writer: &mut W, path: &str) -> RouteResult<()> {
    let mut nodes: Vec<_> = graph.nodes().collect();
    nodes.sort_by_key(|n| n.id.value());
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by_key(|e| e.id.value());

    let mut strings: Vec<&str> = Vec::new();
    for edge in &edges {
        for (k, v) in &edge.tags {
            strings.push(k);
            strings.push(v);
        }
    }
    strings.sort_unstable();
    strings.dedup();
    let string_ids: std::collections::HashMap<&str, i32> = strings
        .iter()
        .enumerate()
        .map(|(i, &s)| (s, i as i32))
        .collect();

    let bounds = graph.bounds();
    let (min_lat, max_lat, min_lon, max_lon) = bounds
        .map(|b| (b.min_lat, b.max_lat, b.min_lon, b.max_lon))
        .unwrap_or((0.0, 0.0, 0.0, 0.0));

    writer.write_all(MAGIC).map_err(|e| io_fail(path, e))?;
    writer.write_i32::<LittleEndian>(VERSION).map_err(|e| io_fail(path, e))?;
    writer.write_i64::<LittleEndian>(nodes.len() as i64).map_err(|e| io_fail(path, e))?;
    writer.write_i64::<LittleEndian>(edges.len() as i64).map_err(|e| io_fail(path, e))?;
    writer.write_f64::<LittleEndian>(min_lat).map_err(|e| io_fail(path, e))?;
    writer.write_f64::<LittleEndian>(max_lat).map_err(|e| io_fail(path, e))?;
    writer.write_f64::<LittleEndian>(min_lon).map_err(|e| io_fail(path, e))?;
    writer.write_f64::<LittleEndian>(max_lon).map_err(|e| io_fail(path, e))?;
    writer.write_i8(bounds.is_some() as i8).map_err(|e| io_fail(path, e))?;
    writer.write_all(&[0u8; HEADER_PADDING]).map_err(|e| io_fail(path, e))?;

    writer.write_i32::<LittleEndian>(strings.len() as i32).map_err(|e| io_fail(path, e))?;
    for (id, s) in strings.iter().enumerate() {
        writer.write_i32::<LittleEndian>(id as i32).map_err(|e| io_fail(path, e))?;
        writer.write_i32::<LittleEndian>(s.len() as i32).map_err(|e| io_fail(path, e))?;
        writer.write_all(s.as_bytes()).map_err(|e| io_fail(path, e))?;
    }

    for node in &nodes {
        writer.write_i64::<LittleEndian>(node.id.value()).map_err(|e| io_fail(path, e))?;
        writer.write_f64::<LittleEndian>(node.coordinate.latitude).map_err(|e| io_fail(path, e))?;
        writer.write_f64::<LittleEndian>(node.coordinate.longitude).map_err(|e| io_fail(path, e))?;
    }

    for edge in &edges {
        writer.write_i64::<LittleEndian>(edge.id.value()).map_err(|e| io_fail(path, e))?;
        writer.write_i64::<LittleEndian>(edge.source.value()).map_err(|e| io_fail(path, e))?;
        writer.write_i64::<LittleEndian>(edge.target.value()).map_err(|e| io_fail(path, e))?;
        writer.write_i8(edge.one_way as i8).map_err(|e| io_fail(path, e))?;
        writer.write_f64::<LittleEndian>(edge.distance.meters()).map_err(|e| io_fail(path, e))?;
        writer.write_all(&[0u8; EDGE_FIXED_PADDING]).map_err(|e| io_fail(path, e))?;

        let mut tags: Vec<_> = edge.tags.iter().collect();
        tags.sort();
        writer.write_i32::<LittleEndian>(tags.len() as i32).map_err(|e| io_fail(path, e))?;
        for (k, v) in tags {
            let key_id = string_ids.get(k.as_str()).copied().unwrap_or(ABSENT_STRING);
            let val_id = string_ids.get(v.as_str()).copied().unwrap_or(ABSENT_STRING);
            writer.write_i32::<LittleEndian>(key_id).map_err(|e| io_fail(path, e))?;
            writer.write_i32::<LittleEndian>(val_id).map_err(|e| io_fail(path, e))?;
        }
    }

    Ok(())
}

/// Deserialize a [`Graph`] from `reader`. Rejects files whose magic does not
/// match, and unknown versions. Rebuilds the adjacency index after reading
/// all edges.
pub fn read_graph<R: Read>(
    reader: &mut R,
    path: &str,
    mut progress: Option<&mut ProgressFn<'_>>,
    cancel: Option<&AtomicBool>,
) -> RouteResult<Graph> {
    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic).map_err(|e| io_fail(path, e))?;
    if &magic != MAGIC {
        return Err(fail(path, "bad magic bytes: not an OGRGRAPH snapshot"));
    }

    let version = reader.read_i32::<LittleEndian>().map_err(|e| io_fail(path, e))?;
    if version != VERSION {
        return Err(fail(path, format!("unsupported snapshot version {version}")));
    }

    let node_count = reader.read_i64::<LittleEndian>().map_err(|e| io_fail(path, e))? as usize;
    let edge_count = reader.read_i64::<LittleEndian>().map_err(|e| io_fail(path, e))? as usize;
    let min_lat = reader.read_f64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
    let max_lat = reader.read_f64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
    let min_lon = reader.read_f64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
    let max_lon = reader.read_f64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
    let has_bounds = reader.read_i8().map_err(|e| io_fail(path, e))? != 0;

    let mut padding = [0u8; HEADER_PADDING];
    reader.read_exact(&mut padding).map_err(|e| io_fail(path, e))?;

    report(&mut progress, "read header", 0.05);

    let string_count = reader.read_i32::<LittleEndian>().map_err(|e| io_fail(path, e))?;
    if string_count < 0 {
        return Err(fail(path, "negative string table count"));
    }
    let mut strings = vec![String::new(); string_count as usize];
    for _ in 0..string_count {
        let id = reader.read_i32::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        let len = reader.read_i32::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        if len < 0 {
            return Err(fail(path, "negative string length"));
        }
        let mut buf = vec![0u8; len as usize];
        reader.read_exact(&mut buf).map_err(|e| io_fail(path, e))?;
        let s = String::from_utf8(buf).map_err(|e| fail(path, format!("invalid UTF-8 in string table: {e}")))?;
        let idx = usize::try_from(id)
            .map_err(|_| fail(path, format!("string id {id} out of range")))?;
        let slot = strings
            .get_mut(idx)
            .ok_or_else(|| fail(path, format!("string id {id} out of range")))?;
        *slot = s;
    }

    report(&mut progress, "read string table", 0.15);

    let resolve = |id: i32, path: &str| -> RouteResult<Option<String>> {
        if id == ABSENT_STRING {
            return Ok(None);
        }
        let idx = usize::try_from(id).map_err(|_| fail(path, format!("string id {id} out of range")))?;
        strings
            .get(idx)
            .cloned()
            .map(Some)
            .ok_or_else(|| fail(path, format!("string id {id} does not resolve")))
    };

    let mut graph = Graph::new();

    for i in 0..node_count {
        let id = reader.read_i64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        let lat = reader.read_f64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        let lon = reader.read_f64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        graph.add_node(NodeId::new(id), Coordinate::new(lat, lon));

        if i % 4096 == 0 {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(fail(path, "load cancelled"));
                }
            }
            report(&mut progress, "reading nodes", 0.15 + 0.35 * (i as f64 / node_count.max(1) as f64));
        }
    }

    report(&mut progress, "read nodes", 0.5);

    for i in 0..edge_count {
        let id = reader.read_i64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        let source = reader.read_i64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        let target = reader.read_i64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        let one_way = reader.read_i8().map_err(|e| io_fail(path, e))? != 0;
        let meters = reader.read_f64::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        let mut pad = [0u8; EDGE_FIXED_PADDING];
        reader.read_exact(&mut pad).map_err(|e| io_fail(path, e))?;

        let tag_count = reader.read_i32::<LittleEndian>().map_err(|e| io_fail(path, e))?;
        if tag_count < 0 {
            return Err(fail(path, "negative tag count"));
        }
        let mut tags = std::collections::HashMap::new();
        for _ in 0..tag_count {
            let key_id = reader.read_i32::<LittleEndian>().map_err(|e| io_fail(path, e))?;
            let val_id = reader.read_i32::<LittleEndian>().map_err(|e| io_fail(path, e))?;
            let key = resolve(key_id, path)?;
            let value = resolve(val_id, path)?;
            if let (Some(key), Some(value)) = (key, value) {
                if key.is_empty() {
                    continue;
                }
                tags.insert(key, value);
            }
        }

        let distance = Distance::new(meters).map_err(|e| fail(path, e.to_string()))?;
        graph
            .add_edge(EdgeId::new(id), NodeId::new(source), NodeId::new(target), one_way, distance, tags)
            .map_err(|e| fail(path, e.to_string()))?;

        if i % 4096 == 0 {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Err(fail(path, "load cancelled"));
                }
            }
            report(&mut progress, "reading edges", 0.5 + 0.45 * (i as f64 / edge_count.max(1) as f64));
        }
    }

    if has_bounds {
        graph.set_bounds(Some(Bounds { min_lat, max_lat, min_lon, max_lon }));
    }
    graph.build_adjacency();

    report(&mut progress, "done", 1.0);

    Ok(graph)
}

/// Convenience wrapper over [`read_graph`] for a filesystem path.
pub fn load_snapshot(
    path: impl AsRef<Path>,
    progress: Option<&mut ProgressFn<'_>>,
    cancel: Option<&AtomicBool>,
) -> RouteResult<Graph> {
    let path_str = path.as_ref().display().to_string();
    let mut file = std::fs::File::open(path.as_ref()).map_err(|e| io_fail(&path_str, e))?;
    read_graph(&mut file, &path_str, progress, cancel)
}

/// Convenience wrapper over [`write_graph`] for a filesystem path.
pub fn save_snapshot(graph: &Graph, path: impl AsRef<Path>) -> RouteResult<()> {
    let path_str = path.as_ref().display().to_string();
    let mut file = std::fs::File::create(path.as_ref()).map_err(|e| io_fail(&path_str, e))?;
    write_graph(graph, &mut file, &path_str)
}
