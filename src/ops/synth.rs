// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Stylesweep and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::{debug, warn};

use crate::host::{Host, HostError, StyleProperty};
use crate::model::{RegisteredStyle, TextNode};
use crate::query::TextProperties;

/// Deterministic name for a synthesized style: `{family}/{weight}/{size}`.
pub fn synthesized_name(props: &TextProperties) -> String {
    format!("{}/{}/{}", props.font_family, props.font_weight, props.font_size)
}

/// Registers a new style mirroring `node`'s effective typography.
///
/// Family, weight and size are required; if any of them cannot be set the new style is removed
/// again. Cosmetic attributes are copied only when uniform on the node, and a rejected cosmetic
/// attribute is logged and left at the host default.
pub fn synthesize<H: Host + ?Sized>(
    host: &mut H,
    node: &TextNode,
    props: &TextProperties,
) -> Result<RegisteredStyle, HostError> {
    let font = props.font_name();
    host.load_font(&font)?;

    let name = synthesized_name(props);
    let style_id = host.create_text_style(&name)?;

    let required = [StyleProperty::FontName(font), StyleProperty::FontSize(props.font_size)];
    for property in required {
        if let Err(err) = host.set_style_property(&style_id, property) {
            if let Err(remove_err) = host.remove_text_style(&style_id) {
                warn!(style_id = %style_id, error = %remove_err, "failed to discard incomplete style");
            }
            return Err(err);
        }
    }

    let optional = [
        node.letter_spacing().into_uniform().map(StyleProperty::LetterSpacing),
        node.line_height().into_uniform().map(StyleProperty::LineHeight),
        node.text_align_horizontal().into_uniform().map(StyleProperty::TextAlignHorizontal),
        node.text_align_vertical().into_uniform().map(StyleProperty::TextAlignVertical),
        node.text_case().into_uniform().map(StyleProperty::TextCase),
        node.text_decoration().into_uniform().map(StyleProperty::TextDecoration),
        node.paragraph_spacing().into_uniform().map(StyleProperty::ParagraphSpacing),
        node.paragraph_indent().into_uniform().map(StyleProperty::ParagraphIndent),
    ];
    for property in optional.into_iter().flatten() {
        let label = property.label();
        if let Err(err) = host.set_style_property(&style_id, property) {
            debug!(style = %name, property = label, error = %err, "could not copy attribute");
        }
    }

    host.text_style(&style_id).ok_or(HostError::StyleNotFound(style_id))
}
