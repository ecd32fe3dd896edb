//! Decoded swatch documents
//!
//! A [`Document`] holds the top-level groups and colors of one swatch
//! file. Groups nest arbitrarily and each owns its children. The tree is
//! read-only once decoded; consumers inspect it through accessors, the
//! [`Visitor`] walk, or the JSON serialization.
//!
//! # JSON shape
//!
//! ```text
//! { "groups": [ { "name": .., "groups": [..], "colors": [..] } ],
//!   "colors": [ { "name": .., "space": "RGB", "vals": [..], "color_type": "GLOBAL" } ] }
//! ```

use std::io::{Read, Seek};

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::ase::Header;
use crate::color::{Color, ColorSpace};
use crate::options::{ConversionOptions, DecodeOptions};
use crate::Result;

/// A named group of colors and nested groups
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Group {
    name: String,
    groups: Vec<Group>,
    colors: Vec<Color>,
}

impl Group {
    /// Create a group from its parts
    pub fn new(name: impl Into<String>, groups: Vec<Group>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            groups,
            colors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct subgroups, in file order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Direct colors, in file order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Whether the group has neither colors nor subgroups
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.colors.is_empty()
    }

    /// Number of colors in this group and all subgroups
    pub fn color_count(&self) -> usize {
        self.colors.len() + self.groups.iter().map(Group::color_count).sum::<usize>()
    }

    /// Depth-first iterator over this group's colors and its subgroups' colors
    pub fn all_colors(&self) -> impl Iterator<Item = &Color> + '_ {
        AllColors::new(&self.colors, &self.groups)
    }

    /// Find a direct subgroup by name
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Copy of this group with every color converted to `space`
    pub fn convert(&self, space: ColorSpace, options: &ConversionOptions) -> Self {
        Self {
            name: self.name.clone(),
            groups: self.groups.iter().map(|g| g.convert(space, options)).collect(),
            colors: self.colors.iter().map(|c| c.convert_with(space, options)).collect(),
        }
    }
}

/// The decoded contents of a swatch file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    header: Header,
    groups: Vec<Group>,
    colors: Vec<Color>,
}

impl Document {
    /// Create a document from its parts
    pub fn new(header: Header, groups: Vec<Group>, colors: Vec<Color>) -> Self {
        Self {
            header,
            groups,
            colors,
        }
    }

    /// Decode from a reader with default options
    pub fn decode<R: Read + Seek>(reader: R) -> Result<Self> {
        crate::ase::decode(reader)
    }

    /// Decode from a reader
    pub fn decode_with_options<R: Read + Seek>(reader: R, options: &DecodeOptions) -> Result<Self> {
        crate::ase::decode_with_options(reader, options)
    }

    /// Decode from an in-memory buffer with default options
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        crate::ase::decode_bytes(data)
    }

    /// File header as found in the input
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Top-level groups, in file order
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Top-level colors (outside any group), in file order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Whether the document has no groups and no colors
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.colors.is_empty()
    }

    /// Number of colors in the whole tree
    pub fn color_count(&self) -> usize {
        self.colors.len() + self.groups.iter().map(Group::color_count).sum::<usize>()
    }

    /// Depth-first iterator over every color: top-level colors first, then
    /// each group's colors before its subgroups'
    pub fn all_colors(&self) -> impl Iterator<Item = &Color> + '_ {
        AllColors::new(&self.colors, &self.groups)
    }

    /// Find a top-level group by name
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Copy of this document with every color converted to `space`
    pub fn convert(&self, space: ColorSpace, options: &ConversionOptions) -> Self {
        Self {
            header: self.header,
            groups: self.groups.iter().map(|g| g.convert(space, options)).collect(),
            colors: self.colors.iter().map(|c| c.convert_with(space, options)).collect(),
        }
    }

    /// Visit the tree depth-first
    ///
    /// Top-level colors are visited before top-level groups; within a
    /// group, its colors come before its subgroups. Groups keep colors and
    /// subgroups in separate lists, so a color's position relative to a
    /// sibling group in the file is not preserved.
    pub fn walk<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for color in &self.colors {
            visitor.color(color, 0);
        }
        for group in &self.groups {
            walk_group(group, visitor, 0);
        }
    }

    /// Compact JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Indented JSON rendering
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// View serializing every color's `vals` as 8-bit integers
    pub fn quantized(&self) -> Quantized<'_> {
        Quantized(self)
    }
}

/// Read-only traversal of a [`Document`]
///
/// `depth` is the number of enclosing groups: 0 for top-level entries.
pub trait Visitor {
    fn enter_group(&mut self, _group: &Group, _depth: usize) {}

    fn color(&mut self, _color: &Color, _depth: usize) {}

    fn leave_group(&mut self, _group: &Group, _depth: usize) {}
}

fn walk_group<V: Visitor + ?Sized>(group: &Group, visitor: &mut V, depth: usize) {
    visitor.enter_group(group, depth);
    for color in &group.colors {
        visitor.color(color, depth + 1);
    }
    for child in &group.groups {
        walk_group(child, visitor, depth + 1);
    }
    visitor.leave_group(group, depth);
}

struct AllColors<'a> {
    current: std::slice::Iter<'a, Color>,
    pending: Vec<&'a Group>,
}

impl<'a> AllColors<'a> {
    fn new(colors: &'a [Color], groups: &'a [Group]) -> Self {
        Self {
            current: colors.iter(),
            pending: groups.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for AllColors<'a> {
    type Item = &'a Color;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(color) = self.current.next() {
                return Some(color);
            }
            let group = self.pending.pop()?;
            self.pending.extend(group.groups.iter().rev());
            self.current = group.colors.iter();
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

/// A document serialized with quantized color values
#[derive(Debug, Clone, Copy)]
pub struct Quantized<'a>(&'a Document);

#[derive(Clone, Copy)]
struct GroupView<'a> {
    group: &'a Group,
    quantize: bool,
}

#[derive(Clone, Copy)]
struct ColorView<'a> {
    color: &'a Color,
    quantize: bool,
}

struct GroupSeq<'a> {
    groups: &'a [Group],
    quantize: bool,
}

struct ColorSeq<'a> {
    colors: &'a [Color],
    quantize: bool,
}

impl Serialize for GroupSeq<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let quantize = self.quantize;
        serializer.collect_seq(self.groups.iter().map(|group| GroupView { group, quantize }))
    }
}

impl Serialize for ColorSeq<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let quantize = self.quantize;
        serializer.collect_seq(self.colors.iter().map(|color| ColorView { color, quantize }))
    }
}

fn serialize_tree<S: Serializer>(
    serializer: S,
    name: Option<&str>,
    groups: &[Group],
    colors: &[Color],
    quantize: bool,
) -> std::result::Result<S::Ok, S::Error> {
    let type_name = if name.is_some() { "Group" } else { "Document" };
    let len = if name.is_some() { 3 } else { 2 };
    let mut state = serializer.serialize_struct(type_name, len)?;
    if let Some(name) = name {
        state.serialize_field("name", name)?;
    }
    state.serialize_field("groups", &GroupSeq { groups, quantize })?;
    state.serialize_field("colors", &ColorSeq { colors, quantize })?;
    state.end()
}

impl Serialize for GroupView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_tree(
            serializer,
            Some(&self.group.name),
            &self.group.groups,
            &self.group.colors,
            self.quantize,
        )
    }
}

impl Serialize for ColorView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let color = self.color;
        let mut state = serializer.serialize_struct("Color", 4)?;
        state.serialize_field("name", color.name())?;
        state.serialize_field("space", &color.space())?;
        if self.quantize {
            state.serialize_field("vals", &color.to_8bit())?;
        } else {
            state.serialize_field("vals", &color.components())?;
        }
        state.serialize_field("color_type", &color.kind())?;
        state.end()
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        ColorView {
            color: self,
            quantize: false,
        }
        .serialize(serializer)
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        GroupView {
            group: self,
            quantize: false,
        }
        .serialize(serializer)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_tree(serializer, None, &self.groups, &self.colors, false)
    }
}

impl Serialize for Quantized<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_tree(serializer, None, &self.0.groups, &self.0.colors, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Cmyk, ColorKind, ColorValue, Rgb};
    use serde_json::json;

    fn sample() -> Document {
        let red = Color::new("Red", ColorValue::Rgb(Rgb::new(1.0, 0.0, 0.0)), ColorKind::Global);
        let ink = Color::new(
            "Ink",
            ColorValue::Cmyk(Cmyk::new(0.0, 0.5, 1.0, 0.25)),
            ColorKind::Spot,
        );
        let paper = Color::new("Paper", ColorValue::Gray(1.0), ColorKind::Normal);
        let inner = Group::new("Inner", vec![], vec![paper]);
        let outer = Group::new("Outer", vec![inner], vec![ink]);
        Document::new(Header::default(), vec![outer], vec![red])
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "groups": [{
                    "name": "Outer",
                    "groups": [{
                        "name": "Inner",
                        "groups": [],
                        "colors": [{
                            "name": "Paper", "space": "GRAY", "vals": [1.0], "color_type": "NORMAL"
                        }]
                    }],
                    "colors": [{
                        "name": "Ink", "space": "CMYK", "vals": [0.0, 0.5, 1.0, 0.25], "color_type": "SPOT"
                    }]
                }],
                "colors": [{
                    "name": "Red", "space": "RGB", "vals": [1.0, 0.0, 0.0], "color_type": "GLOBAL"
                }]
            })
        );
    }

    #[test]
    fn test_quantized_json() {
        let doc = sample();
        let value = serde_json::to_value(doc.quantized()).unwrap();
        assert_eq!(value["colors"][0]["vals"], json!([255, 0, 0]));
        assert_eq!(value["groups"][0]["colors"][0]["vals"], json!([0, 127, 255, 63]));
    }

    #[test]
    fn test_all_colors_order() {
        let doc = sample();
        let names: Vec<&str> = doc.all_colors().map(Color::name).collect();
        assert_eq!(names, ["Red", "Ink", "Paper"]);
        assert_eq!(doc.color_count(), 3);
    }

    #[test]
    fn test_walk_depths() {
        #[derive(Default)]
        struct Outline(Vec<String>);

        impl Visitor for Outline {
            fn enter_group(&mut self, group: &Group, depth: usize) {
                self.0.push(format!("{}+{}", "  ".repeat(depth), group.name()));
            }
            fn color(&mut self, color: &Color, depth: usize) {
                self.0.push(format!("{}{}", "  ".repeat(depth), color.name()));
            }
            fn leave_group(&mut self, group: &Group, depth: usize) {
                self.0.push(format!("{}-{}", "  ".repeat(depth), group.name()));
            }
        }

        let mut outline = Outline::default();
        sample().walk(&mut outline);
        assert_eq!(
            outline.0,
            ["Red", "+Outer", "  Ink", "  +Inner", "    Paper", "  -Inner", "-Outer"]
        );
    }

    #[test]
    fn test_convert_whole_document() {
        let doc = sample().convert(ColorSpace::Lab, &ConversionOptions::default());
        assert!(doc.all_colors().all(|c| c.space() == ColorSpace::Lab));
        assert_eq!(doc.group("Outer").unwrap().group("Inner").unwrap().colors()[0].name(), "Paper");
    }
}
