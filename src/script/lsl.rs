//! Second Life playback script.
//!
//! The generated script reads the first texture in the prim's inventory, decodes the artifact
//! name with the same six-field layout as [`crate::decode`], and starts texture animation with
//! `sideX = columns`, `sideY = rows`, `length = frame_count` and `speed = frame_rate`. The viewer
//! walks cells left to right, top to bottom, which is the row-major order of
//! [`crate::cell_of`].

/// Texture animation flags accepted by `llSetLinkTextureAnim`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LslEffect {
    Loop,
    Smooth,
    Reverse,
    PingPong,
}

impl LslEffect {
    fn constant(self) -> &'static str {
        match self {
            Self::Loop => "LOOP",
            Self::Smooth => "SMOOTH",
            Self::Reverse => "REVERSE",
            Self::PingPong => "PING_PONG",
        }
    }
}

/// Where and how the animation plays.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LslOptions {
    /// Link number of the prim that shows the sheet.
    pub link_number: i32,
    /// Face to animate; `None` animates every face.
    pub face: Option<u32>,
    pub effects: Vec<LslEffect>,
}

impl Default for LslOptions {
    fn default() -> Self {
        Self {
            link_number: 2,
            face: None,
            effects: vec![LslEffect::Loop],
        }
    }
}

/// Render the LSL playback script.
pub fn lsl_script(opts: &LslOptions) -> String {
    let face = opts
        .face
        .map_or_else(|| "ALL_SIDES".to_owned(), |f| f.to_string());
    let effects = opts
        .effects
        .iter()
        .map(|e| e.constant())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "\
integer animOn = TRUE;
list effects = [{effects}];
integer movement = 0;
integer link_number = {link};
integer face = {face};
integer sideX = 1;
integer sideY = 1;
float start = 0.0;
float length = 0.0;
float speed = 10.0;

reset()
{{
    llSetLinkTextureAnim(link_number, FALSE, face, 0, 0, 0.0, 0.0, 1.0);
}}

animate()
{{
    if (animOn)
    {{
        integer effectBits = 0;
        integer i;
        for (i = 0; i < llGetListLength(effects); i++)
        {{
            effectBits = (effectBits | llList2Integer(effects, i));
        }}
        llSetLinkTextureAnim(link_number, ANIM_ON | effectBits | movement, face, sideX, sideY, start, length, speed);
    }}
    else
    {{
        llSetLinkTextureAnim(link_number, 0, face, sideX, sideY, start, length, speed);
    }}
}}

fetch()
{{
    string texture = llGetInventoryName(INVENTORY_TEXTURE, 0);
    llSetLinkTexture(link_number, texture, face);

    // <sheet_name>_<sequence_number>_<rows>_<columns>_<frame_count>_<frame_rate>
    list data = llParseStringKeepNulls(texture, [\"_\"], []);
    if (llGetListLength(data) != 6)
    {{
        llOwnerSay(\"unrecognised sheet name: \" + texture);
        return;
    }}

    integer rows = (integer) llList2String(data, 2);
    integer columns = (integer) llList2String(data, 3);
    integer frame_count = (integer) llList2String(data, 4);
    integer frame_rate = (integer) llList2String(data, 5);

    sideX = columns;
    sideY = rows;
    length = (float) frame_count;
    speed = (float) frame_rate;

    if (speed > 0.0)
    {{
        animate();
    }}
}}

default
{{
    state_entry()
    {{
        reset();
        fetch();
    }}

    changed(integer change)
    {{
        if (change & CHANGED_INVENTORY)
        {{
            reset();
            fetch();
        }}
    }}
}}
",
        link = opts.link_number,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/script/lsl.rs"]
mod tests;
