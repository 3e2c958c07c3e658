//! The `YJ_symbols` shared KFX symbol table.
//!
//! This is the well-known import every KFX reader and writer agrees on
//! (§3, §4.A). Names are the literal strings Amazon registers for these
//! IDs — many begin with `$` as part of the name itself (`$metadata`,
//! `$text_alignment`, `$justify`), which is distinct from the `$123`
//! numeric-ID shorthand recognized by [`super::SymbolTable::intern`].
//!
//! IDs mirror the well-known KFX field/enum numbering also used by the
//! calibre-kfx-input plugin lineage; comments name the CSS-facing concept
//! each backs.

/// Name of this import, per the Ion import-table convention (§3, §4.A).
pub const NAME: &str = "YJ_symbols";

/// Import format version. Bump alongside table additions.
pub const VERSION: u32 = 10;

/// First ID in this import (system symbols 1–9 precede it).
pub const FIRST_ID: u64 = 10;

/// `(id, name)` pairs, ascending by id. Table is dense enough for tests and
/// debug formatting but is not Amazon's complete 800+ entry table.
pub const SYMBOLS: &[(u64, &str)] = &[
    (10, "$language"),
    (11, "$font_family"),
    (12, "$font_style"),
    (13, "$font_weight"),
    (16, "$font_size"),
    (19, "$text_color"),
    (21, "$background_color"),
    (23, "$text_decoration_underline"),
    (27, "$text_decoration_line_through"),
    (32, "$letter_spacing"),
    (33, "$word_spacing"),
    (34, "$text_alignment"),
    (36, "$text_indent"),
    (41, "$text_transform"),
    (42, "$line_height"),
    (44, "$vertical_align"),
    (45, "$white_space_nowrap"),
    (47, "$margin_top"),
    (48, "$margin_left"),
    (49, "$margin_bottom"),
    (50, "$margin_right"),
    (52, "$padding_top"),
    (54, "$padding_bottom"),
    (56, "$width"),
    (57, "$height"),
    (59, "$left"),
    (61, "$right"),
    (62, "$min_height"),
    (63, "$min_width"),
    (65, "$max_width"),
    (68, "$visibility"),
    (72, "$opacity"),
    (99, "$decoration_break_clone"),
    (100, "$list_type"),
    (127, "$block_type"),
    (135, "$break_inside"),
    (140, "$default_text_alignment"),
    (141, "$section_content"),
    (142, "$inline_style_runs"),
    (143, "$offset"),
    (144, "$count"),
    (145, "$text"),
    (146, "$content_array"),
    (154, "$description"),
    (155, "$position"),
    (156, "$page_layout"),
    (157, "$style"),
    (159, "$content_type"),
    (161, "$format"),
    (162, "$mime_type"),
    (164, "$resource"),
    (165, "$location"),
    (169, "$reading_orders"),
    (170, "$sections"),
    (173, "$style_name"),
    (174, "$section_name"),
    (175, "$resource_name"),
    (176, "$content_name"),
    (178, "$reading_order_name"),
    (179, "$anchor"),
    (180, "$template_name"),
    (181, "$entities"),
    (182, "$location_entries"),
    (183, "$position_info"),
    (184, "$eid_index"),
    (185, "$eid_value"),
    (186, "$external_url"),
    (212, "$toc"),
    (233, "$landmark_cover"),
    (235, "$nav_type"),
    (236, "$landmarks_nav_type"),
    (237, "$landmarks"),
    (238, "$landmark_type"),
    (239, "$nav_id"),
    (240, "$nav_unit_ref"),
    (241, "$nav_title"),
    (244, "$text_content"),
    (246, "$nav_target"),
    (247, "$nav_entries"),
    (249, "$nav_container"),
    (252, "$container_contents"),
    (253, "$entity_deps"),
    (254, "$mandatory_deps"),
    (258, "$metadata"),
    (259, "$content"),
    (260, "$section"),
    (264, "$position_map"),
    (265, "$position_id_map"),
    (266, "$page_template"),
    (269, "$paragraph"),
    (270, "$container"),
    (271, "$image"),
    (276, "$list"),
    (277, "$list_item"),
    (284, "$png"),
    (285, "$jpg"),
    (286, "$font_format"),
    (306, "$unit"),
    (307, "$value"),
    (308, "$em"),
    (309, "$rem"),
    (310, "$multiplier"),
    (311, "$lh"),
    (312, "$pt"),
    (313, "$ex"),
    (314, "$percent"),
    (315, "$cm"),
    (316, "$mm"),
    (317, "$in"),
    (318, "$px"),
    (320, "$center"),
    (321, "$justify"),
    (326, "$full_page"),
    (328, "$decoration_present"),
    (343, "$decimal_list"),
    (348, "$singleton_id"),
    (349, "$none"),
    (350, "$normal"),
    (351, "$default_reading_order"),
    (353, "$avoid"),
    (355, "$font_weight_100"),
    (356, "$font_weight_200"),
    (357, "$font_weight_300"),
    (359, "$font_weight_500"),
    (360, "$font_weight_600"),
    (361, "$bold"),
    (362, "$font_weight_800"),
    (363, "$font_weight_900"),
    (369, "$small_caps"),
    (370, "$super"),
    (371, "$sub"),
    (372, "$uppercase"),
    (373, "$lowercase"),
    (374, "$capitalize"),
    (377, "$contain"),
    (378, "$none_fit"),
    (381, "$oblique"),
    (382, "$italic"),
    (383, "$block"),
    (389, "$book_navigation"),
    (391, "$nav_container_type"),
    (392, "$nav_container_ref"),
    (393, "$nav_definition"),
    (394, "$nav_unit"),
    (395, "$nav_unit_list"),
    (396, "$bodymatter"),
    (403, "$text_offset"),
    (409, "$container_id"),
    (410, "$compression_type"),
    (411, "$drm_scheme"),
    (412, "$chunk_size"),
    (413, "$index_table_offset"),
    (414, "$index_table_length"),
    (415, "$symbol_table_offset"),
    (416, "$symbol_table_length"),
    (417, "$raw_media"),
    (419, "$container_entity_map"),
    (421, "$both"),
    (422, "$width_px"),
    (423, "$height_px"),
    (447, "$text_top"),
    (449, "$text_bottom"),
    (453, "$caption_side"),
    (459, "$border_top_left_radius"),
    (460, "$border_top_right_radius"),
    (461, "$border_bottom_right_radius"),
    (462, "$border_bottom_left_radius"),
    (476, "$overflow_clip"),
    (490, "$kindle_metadata"),
    (491, "$metadata_entries"),
    (492, "$metadata_key"),
    (495, "$metadata_group"),
    (505, "$em_fontsize"),
    (538, "$document_data"),
    (546, "$image_fit"),
    (550, "$location_map"),
    (569, "$word_break"),
    (570, "$break_all"),
    (580, "$image_layout"),
    (583, "$font_variant"),
    (584, "$image_alt_text"),
    (586, "$capability_name"),
    (587, "$min_version"),
    (588, "$version_number"),
    (589, "$capability_version"),
    (590, "$capabilities"),
    (593, "$format_capabilities"),
    (594, "$fc_offset"),
    (595, "$fc_length"),
    (597, "$auxiliary_data"),
    (598, "$aux_data_ref"),
    (599, "$book_metadata"),
    (600, "$font"),
    (601, "$bcRawFont"),
    (602, "$reading_order"),
    (603, "$reading_order_name_ref"),
    (604, "$category"),
    (605, "$feature_name"),
    (606, "$title"),
    (607, "$author"),
    (608, "$creator"),
    (609, "$publisher"),
    (610, "$isbn"),
    (611, "$reading_order_list"),
    (628, "$clear"),
    (633, "$cell_align"),
    (788, "$break_after"),
    (789, "$break_before"),
    (790, "$content_role"),
    (791, "$layout_hints"),
    (792, "$baseline_style"),
    (793, "$treat_as_title"),
    (794, "$layout_hint_nav_container"),
    (795, "$superscript"),
    (796, "$subscript"),
];

/// Highest id assigned by this import. Local symbols begin immediately after.
pub fn max_id() -> u64 {
    SYMBOLS.last().map(|&(id, _)| id).unwrap_or(FIRST_ID - 1)
}
