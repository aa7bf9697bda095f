// Fog bands shift left and right over the house.

use super::{Role, Scene};

const FRAME_0: &[&str] = &[
    r" = = = = = = = = = = = = = = = = = = = = = =",
    r"   - - - - - - - - - - - - - - - - - - - -",
    r" = = = = = = = = = = = = = = = = = = = = = =",
    r"   - - - - - - - - - - - - - = = = = = = = =",
    r" = = = = = = = = = = = = = = = = = = = = = =",
    r"   - - - - - - - - - - - - - - - - - - - -",
    r" = = = = = = = = = = = = = = = = = = = = = =",
    r"           ( _ _._",
    r"          |_|-'_~_`-._",
    r"       .-'-_~_-~_-~-_`-._",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_1: &[&str] = &[
    r"  = = = = = = = = = = = = = = = = = = = = = =",
    r"    - - - - - - - - - - - - - - - - - - - -",
    r"  = = = = = = = = = = = = = = = = = = = = = =",
    r"    - - - - - - - - - - - - - - - - - - - -",
    r"  = = = = = = = = = = = = = = = = = = = = = =",
    r"    - - - - - - - - - - - - - - - - - - - -",
    r"  = = = = = = = = = = = = = = = = = = = = = =",
    r"           ( _ _._",
    r"          |_|-'_~_`-._",
    r"       .-'-_~_-~_-~-_`-._",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_2: &[&str] = &[
    r"   = = = = = = = = = = = = = = = = = = = = = =",
    r"     - - - - - - - - - - - - - - - - - - - -",
    r"   = = = = = = = = = = = = = = = = = = = = = =",
    r"     - - - - - - - - - - - - - - = = = = = = =",
    r"   = = = = = = = = = = = = = = = = = = = = = =",
    r"     - - - - - - - - - - - - - - - - - - - -",
    r"   = = = = = = = = = = = = = = = = = = = = = =",
    r"           ( _ _._",
    r"          |_|-'_~_`-._",
    r"       .-'-_~_-~_-~-_`-._",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_3: &[&str] = &[
    r"  = = = = = = = = = = = = = = = = = = = = = =",
    r"    - - - - - - - - - - - - - - - - - - - -",
    r"  = = = = = = = = = = = = = = = = = = = = = =",
    r"    - - - - - - - - - - - - - - - - - - - -",
    r"  = = = = = = = = = = = = = = = = = = = = = =",
    r"    - - - - - - - - - - - - - - - - - - - -",
    r"  = = = = = = = = = = = = = = = = = = = = = =",
    r"           ( _ _._",
    r"          |_|-'_~_`-._",
    r"       .-'-_~_-~_-~-_`-._",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

pub static FOG: Scene = Scene {
    name: "fog",
    width: 55,
    height: 13,
    default_role: Role::Fog,
    char_roles: &[
        ('=', Role::Fog),
        ('-', Role::Fog),
        ('~', Role::Fog),
        ('(', Role::HouseWall),
        (')', Role::HouseWall),
        ('[', Role::HouseWindow),
        (']', Role::HouseWindow),
        ('_', Role::HouseWall),
        ('|', Role::HouseWall),
        ('.', Role::HouseWall),
        ('\'', Role::HouseWall),
    ],
    frames: &[FRAME_0, FRAME_1, FRAME_2, FRAME_3],
};
