//! Moon with twinkling stars.

use super::{Role, Scene};

const FRAME_0: &[&str] = &[
    r"    .    +        .    *        .       +",
    r"         .    _.._      .          +        .",
    r"   +       .' .-'`    *      .        *",
    r"    .     /  /    +       .       .        +",
    r"      *  |  |        .       +         .",
    r"    .     \  \   +      *        .          *",
    r"       +  '._'-._ .        .    +       .",
    r"    .      ( _ _._      +         .   *    +",
    r"     +    |_|-'_~_`-._     .   +      .",
    r"   .   .-'-_~_-~_-~-_`-._        .          +",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_1: &[&str] = &[
    r"    *    .        +    .        *       .",
    r"         +    _.._      *          .        +",
    r"   .       .' .-'`    +      *        .",
    r"    +     /  /    *       +       *        .",
    r"      .  |  |        *       +         .",
    r"    +     \  \   .      +        *          .",
    r"       *  '._'-._ +        *    .       +",
    r"    +      ( _ _._      *         +   .    *",
    r"     .    |_|-'_~_`-._     +   *      .",
    r"   +   .-'-_~_-~_-~-_`-._        *          .",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_2: &[&str] = &[
    r"    .    +        .    *        .       +",
    r"         .    _.._      .          +        .",
    r"   +       .' .-'`    *      .        *",
    r"    .     /  /    +       .       .        +",
    r"      *  |  |        .       +         .",
    r"    .     \  \   +      *        .          *",
    r"       +  '._'-._ .        .    +       .",
    r"    .      ( _ _._      +         .   *    +",
    r"     +    |_|-'_~_`-._     .   +      .",
    r"   .   .-'-_~_-~_-~-_`-._        .          +",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_3: &[&str] = &[
    r"    +    .        *    +        .       *",
    r"         *    _.._      +          .        *",
    r"   .       .' .-'`    .      +        *",
    r"    *     /  /    .       +       *        .",
    r"      +  |  |        +       *         *",
    r"    .     \  \   *      .        +          .",
    r"       .  '._'-._ .        +    .       .",
    r"    .      ( _ _._      *         .   +    .",
    r"     +    |_|-'_~_`-._     .   +      *",
    r"   .   .-'-_~_-~_-~-_`-._        +          *",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

pub static CLEAR_NIGHT: Scene = Scene {
    name: "clear-night",
    width: 55,
    height: 13,
    default_role: Role::Sky,
    char_roles: &[
        ('.', Role::Star),
        ('+', Role::Star),
        ('*', Role::Star),
        ('(', Role::Moon),
        (')', Role::Moon),
        ('\'', Role::Moon),
        ('/', Role::Moon),
        ('\\', Role::Moon),
        ('|', Role::Moon),
        ('~', Role::Ground),
        ('[', Role::HouseWindow),
        (']', Role::HouseWindow),
        ('_', Role::HouseWall),
        ('-', Role::HouseWall),
        ('=', Role::HouseDoor),
    ],
    frames: &[FRAME_0, FRAME_1, FRAME_2, FRAME_3],
};
