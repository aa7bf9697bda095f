//! Sun over the house; rays pulse between frames.

use super::{Role, Scene};

const FRAME_0: &[&str] = &[
    r"       \   |   /",
    r"        .---.",
    r"     --( o o )--",
    r"        `---'            .-~~~-.",
    r"       /   |   \   .- ~ ~-(       )- ~",
    r"                   /                     \",
    r"                          ~",
    r"           ( _ _._",
    r"          |_|-'_~_`-._",
    r"       .-'-_~_-~_-~-_`-._",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_1: &[&str] = &[
    r"        \  |  /",
    r"         .---.",
    r"      ---( o o )---",
    r"         `---'          .-~~~-.",
    r"        /   |   \ .- ~ ~-(       )- ~",
    r"                    /                     \",
    r"                           ~",
    r"            ( _ _._",
    r"           |_|-'_~_`-._",
    r"        .-'-_~_-~_-~-_`-._",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_2: &[&str] = &[
    r"       \   |   /",
    r"        .---.",
    r"     --( o o )--",
    r"        `---'            .-~~~-.",
    r"       /   |   \   .- ~ ~-(       )- ~",
    r"                   /                     \",
    r"                          ~",
    r"           ( _ _._",
    r"          |_|-'_~_`-._",
    r"       .-'-_~_-~_-~-_`-._",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_3: &[&str] = &[
    r"        /  |  \",
    r"         .---.",
    r"      ---( o o )---",
    r"         `---'          .-~~~-.",
    r"        /   |   \ .- ~ ~-(       )- ~",
    r"                    /                     \",
    r"                           ~",
    r"            ( _ _._",
    r"           |_|-'_~_`-._",
    r"        .-'-_~_-~_-~-_`-._",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

pub static CLEAR_DAY: Scene = Scene {
    name: "clear-day",
    width: 55,
    height: 13,
    default_role: Role::Sky,
    char_roles: &[
        ('\\', Role::SunRay),
        ('/', Role::SunRay),
        ('|', Role::SunRay),
        ('-', Role::Sun),
        ('.', Role::Sun),
        ('(', Role::Sun),
        (')', Role::Sun),
        ('o', Role::Sun),
        ('`', Role::Sun),
        ('\'', Role::Sun),
        ('~', Role::Ground),
        ('[', Role::HouseWindow),
        (']', Role::HouseWindow),
        ('_', Role::HouseWall),
        ('^', Role::Ground),
        ('=', Role::HouseDoor),
    ],
    frames: &[FRAME_0, FRAME_1, FRAME_2, FRAME_3],
};
