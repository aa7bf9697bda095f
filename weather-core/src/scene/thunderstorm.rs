use super::{Role, Scene};

const FRAME_0: &[&str] = &[
    r"            .-~~~-.",
    r"      .- ~ ~-(       )- ~       .-~~~-.",
    r"     /            /\      \.- ~-(       )- ~",
    r"    |             \ \      |                  \",
    r"     \            / /     / \                /",
    r"       ~- . _____/ /. -~    ~- . ___ . -~",
    r"      ,  |  , / /  |  , |  ,  |  ,  |  ,",
    r"    |  ,  |  *  ,(  _ _._  |  ,  |  ,  |",
    r"      ,  |  ,  |_|-'_~_`-._  ,  |  ,  |",
    r"    |  ,  |.-'-_~_-~_-~-_`-._  |  ,  |  ,",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_1: &[&str] = &[
    r"            .-~~~-.",
    r"      .- ~ ~-(       )- ~       .-~~~-.",
    r"     /            /\      \.- ~-(       )- ~",
    r"    |           ** \ \      |                  \",
    r"     \          *  / /     / \                /",
    r"       ~- . *_***__/ /. -~    ~- . ___ . -~",
    r"      ,  |  , / /*  |  , |  ,  |  ,  |  ,",
    r"    |  ,  |  ** ,(  _ _._  |  ,  |  ,  |",
    r"      ,  |  ,  |_|-'_~_`-._  ,  |  ,  |",
    r"    |  ,  |.-'-_~_-~_-~-_`-._  |  ,  |  ,",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_2: &[&str] = &[
    r"            .-~~~-.",
    r"      .- ~ ~-(       )- ~       .-~~~-.",
    r"     /            /\      \.- ~-(       )- ~",
    r"    |             \ \      |                  \",
    r"     \            / /     / \                /",
    r"       ~- . _____/ /. -~    ~- . ___ . -~",
    r"      ,  |  , / /  |  , |  ,  |  ,  |  ,",
    r"    |  ,  |  *  ,(  _ _._  |  ,  |  ,  |",
    r"      ,  |  ,  |_|-'_~_`-._  ,  |  ,  |",
    r"    |  ,  |.-'-_~_-~_-~-_`-._  |  ,  |  ,",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

const FRAME_3: &[&str] = &[
    r"            .-~~~-.",
    r"      .- ~ ~-(       )- ~       .-~~~-.",
    r"     /            /\      \.- ~-(       )- ~",
    r"    |           ** \ \      |                  \",
    r"     \          *  / /     / \                /",
    r"       ~- . *_***__/ /. -~    ~- . ___ . -~",
    r"      ,  |  , / /*  |  , |  ,  |  ,  |  ,",
    r"    |  ,  |  ** ,(  _ _._  |  ,  |  ,  |",
    r"      ,  |  ,  |_|-'_~_`-._  ,  |  ,  |",
    r"    |  ,  |.-'-_~_-~_-~-_`-._  |  ,  |  ,",
    r"   ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~",
    r"   | []  []   ___   []  [] |_._._._._.",
    r"   |_________|___|__________|=|=|=|=|=|",
];

pub static THUNDERSTORM: Scene = Scene {
    name: "thunderstorm",
    width: 55,
    height: 13,
    default_role: Role::CloudDark,
    char_roles: &[
        ('/', Role::Lightning),
        ('\\', Role::Lightning),
        ('*', Role::Lightning),
        ('|', Role::Rain),
        (',', Role::Rain),
        ('-', Role::CloudDark),
        ('.', Role::CloudDark),
        ('(', Role::CloudDark),
        (')', Role::CloudDark),
        ('~', Role::Ground),
        ('[', Role::HouseWindow),
        (']', Role::HouseWindow),
        ('_', Role::HouseWall),
        ('=', Role::HouseDoor),
        ('\'', Role::HouseWall),
    ],
    frames: &[FRAME_0, FRAME_1, FRAME_2, FRAME_3],
};
