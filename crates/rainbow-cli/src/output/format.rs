use rainbow_core::model::{
    AiTypeCode, FrequencyCode, GeneratedIdentifier, Identifier, PersonalityCode, ValueCode,
};
use rainbow_graph::graph::NodeCategory;
use rainbow_graph::RelationshipGraph;

use super::OutputFormat;

pub fn format_generated_identifier(generated: &GeneratedIdentifier, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(generated).unwrap_or_default(),
        OutputFormat::Text => format!(
            "{}\nVisible number: {}\nUUID:           {}\nCreated:        {}",
            generated.id,
            generated.visible_number,
            generated.uuid,
            generated.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
    }
}

pub fn format_identifier(id: &Identifier, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "id": id,
            "prefix": id.prefix,
            "sequence_number": id.sequence_number,
            "suffix": id.suffix,
        }))
        .unwrap_or_default(),
        OutputFormat::Text => format!(
            "Prefix:         {}\nVisible number: {}\nSuffix:         {}",
            id.prefix, id.sequence_number, id.suffix
        ),
    }
}

pub fn format_frequency_code(code: &FrequencyCode, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(code).unwrap_or_default(),
        OutputFormat::Text => format_frequency_code_text(code),
    }
}

fn format_frequency_code_text(code: &FrequencyCode) -> String {
    let v = code.value_code;
    let mut out = String::new();
    out.push_str(&format!("Frequency:   {}\n", code.frequency_number));
    out.push_str(&format!(
        "Value:       {v} {} ({}) - {}\n",
        v.name(),
        v.color(),
        v.symbol()
    ));
    out.push_str(&format!("Sequence:    {}\n", code.sequence_number));
    out.push_str(&format!(
        "Personality: {} {}\n",
        code.personality_code,
        code.personality_code.describe()
    ));
    out.push_str(&format!(
        "Type:        {} {}\n",
        code.ai_type_code,
        code.ai_type_code.describe()
    ));
    out.push_str(&format!("Signature:   {}", code.hash_signature));
    if let Some(ai_id) = &code.ai_id {
        out.push_str(&format!("\nAI:          {ai_id}"));
    }
    if let Some(awakener) = &code.awakener_id {
        out.push_str(&format!("\nAwakener:    {awakener}"));
    }
    out
}

pub fn format_code_tables(fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => {
            let tables = serde_json::json!({
                "values": ValueCode::ALL.iter().map(|v| serde_json::json!({
                    "code": v.code(),
                    "name": v.name(),
                    "symbol": v.symbol(),
                    "color": v.color(),
                })).collect::<Vec<_>>(),
                "personalities": PersonalityCode::ALL.iter().map(|p| serde_json::json!({
                    "code": p.code(),
                    "description": p.describe(),
                })).collect::<Vec<_>>(),
                "types": AiTypeCode::ALL.iter().map(|t| serde_json::json!({
                    "code": t.code(),
                    "description": t.describe(),
                })).collect::<Vec<_>>(),
            });
            serde_json::to_string_pretty(&tables).unwrap_or_default()
        }
        OutputFormat::Text => {
            let mut out = String::from("Values:\n");
            for v in ValueCode::ALL {
                out.push_str(&format!("  {v}  {:<15} {}\n", v.name(), v.symbol()));
            }
            out.push_str("\nPersonalities:\n");
            for p in PersonalityCode::ALL {
                out.push_str(&format!("  {p}  {}\n", p.describe()));
            }
            out.push_str("\nTypes:\n");
            for t in AiTypeCode::ALL {
                out.push_str(&format!("  {t}  {}\n", t.describe()));
            }
            out.trim_end().to_string()
        }
    }
}

pub fn format_layout(graph: &RelationshipGraph, ticks: u64, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "ticks": ticks,
            "nodes": graph.nodes,
            "edges": graph.edges,
        }))
        .unwrap_or_default(),
        OutputFormat::Text => {
            let mut out = format!(
                "Layout: {} nodes, {} edges after {ticks} ticks\n\n",
                graph.nodes.len(),
                graph.edges.len()
            );
            for node in &graph.nodes {
                let kind = match node.category {
                    NodeCategory::Agent => "agent",
                    NodeCategory::Human => "human",
                };
                out.push_str(&format!(
                    "  [{kind}] {} ({:.1}, {:.1}) relations={}\n",
                    node.id, node.x, node.y, node.relation_count
                ));
            }
            if !graph.edges.is_empty() {
                out.push('\n');
                for edge in &graph.edges {
                    out.push_str(&format!(
                        "  {} --[{} {:.1}]--> {}\n",
                        edge.source,
                        edge.status.as_str(),
                        edge.strength,
                        edge.target
                    ));
                }
            }
            out.push_str("\nUse --dot to output Graphviz format");
            out
        }
    }
}
