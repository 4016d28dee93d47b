use std::fmt::Write;

pub const STARWARS_SCHEMA: &str =
    include_str!("starwars_schema.graphql");

/// Generates a schema whose `Query` type declares `field_count` fields with
/// similar names (`field0`, `fieldName1`, `otherField2`, ...), so ranking has
/// plenty of near misses to sort through.
pub fn wide_schema(field_count: usize) -> String {
    let mut out = String::with_capacity(field_count * 32);
    out.push_str("type Query {\n");
    for i in 0..field_count {
        let name = match i % 3 {
            0 => format!("field{i}"),
            1 => format!("fieldName{i}"),
            _ => format!("otherField{i}"),
        };
        writeln!(out, "  {name}(arg{i}: Int): String").unwrap();
    }
    out.push_str("}\n");
    out
}
