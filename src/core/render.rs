use crate::domain::model::{RegionProfile, RenderedModule, Ring};
use std::fmt::{self, Write};

const CORNER_LABELS: [&str; 5] = [
    "Noroeste",
    "Nordeste",
    "Sudeste",
    "Sudoeste",
    "Fechando o polígono",
];

/// Builds the TypeScript module text for `ring`. Pure: no I/O, and the
/// simplified literal only depends on `profile`.
pub fn render_module(profile: &RegionProfile, ring: &Ring) -> RenderedModule {
    let mut text = String::new();
    write_module(&mut text, profile, ring).expect("formatting into a String is infallible");

    RenderedModule {
        text,
        coordinate_count: ring.len(),
    }
}

/// A quoted, escaped TypeScript string literal.
struct StringLiteral<'a>(&'a str);

impl fmt::Display for StringLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = serde_json::to_string(self.0).map_err(|_| fmt::Error)?;
        f.write_str(&quoted)
    }
}

/// Text for a `//` comment; control characters would end the comment early.
struct CommentText<'a>(&'a str);

impl fmt::Display for CommentText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            f.write_char(if c.is_control() { ' ' } else { c })?;
        }
        Ok(())
    }
}

fn write_module(out: &mut String, profile: &RegionProfile, ring: &Ring) -> fmt::Result {
    write_simplified(out, profile)?;
    out.push_str("\n\n");
    write_detailed(out, profile, ring)
}

fn write_simplified(out: &mut String, profile: &RegionProfile) -> fmt::Result {
    writeln!(
        out,
        "// GeoJSON simplificado do estado do {}",
        CommentText(&profile.name)
    )?;
    writeln!(out, "export const {} = {{", profile.simplified_constant)?;
    writeln!(out, "  type: \"FeatureCollection\",")?;
    writeln!(out, "  features: [")?;
    writeln!(out, "    {{")?;
    writeln!(out, "      type: \"Feature\",")?;
    writeln!(out, "      properties: {{")?;
    writeln!(out, "        name: {},", StringLiteral(&profile.name))?;
    writeln!(out, "        state: {}", StringLiteral(&profile.state))?;
    writeln!(out, "      }},")?;
    writeln!(out, "      geometry: {{")?;
    writeln!(out, "        type: \"Polygon\",")?;
    writeln!(out, "        coordinates: [[")?;

    let corners = profile.bounds.corners();
    let last = corners.len() - 1;
    for (i, ((lon, lat), label)) in corners.iter().zip(CORNER_LABELS).enumerate() {
        // The closing corner has no comma, so pad to keep the comments aligned.
        let separator = if i == last { " " } else { "," };
        writeln!(out, "          [{:?}, {:?}]{} // {}", lon, lat, separator, label)?;
    }

    writeln!(out, "        ]]")?;
    writeln!(out, "      }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "  ]")?;
    write!(out, "}} as const")
}

fn write_detailed(out: &mut String, profile: &RegionProfile, ring: &Ring) -> fmt::Result {
    writeln!(
        out,
        "// GeoJSON preciso do estado do {} baseado em dados oficiais do IBGE",
        CommentText(&profile.name)
    )?;
    writeln!(out, "export const {} = {{", profile.detailed_constant)?;
    writeln!(out, "  type: \"Feature\" as const,")?;
    writeln!(out, "  properties: {{")?;
    writeln!(out, "    name: {},", StringLiteral(&profile.name))?;
    writeln!(out, "    state: {}", StringLiteral(&profile.state))?;
    writeln!(out, "  }},")?;
    writeln!(out, "  geometry: {{")?;
    writeln!(out, "    type: \"Polygon\" as const,")?;
    writeln!(out, "    coordinates: [[")?;
    writeln!(
        out,
        "      // Coordenadas reais do contorno do {} - dados oficiais do IBGE ({} pontos)",
        CommentText(&profile.name),
        ring.len()
    )?;

    let last = ring.len().saturating_sub(1);
    for (i, coord) in ring.iter().enumerate() {
        if i == last {
            writeln!(out, "      {}", coord)?;
        } else {
            writeln!(out, "      {},", coord)?;
        }
    }

    writeln!(out, "    ]]")?;
    writeln!(out, "  }}")?;
    write!(out, "}}")
}
