use crate::catalog::{FunctionDef, ParamDef};

pub(crate) const API_TABLE: &[(&str, &[FunctionDef])] = &[
    (
        "Player",
        &[
            FunctionDef {
                name: "GetLocalPlayerName",
                description: "Get the name of the local player",
                params: &[],
                return_type: "string",
                return_description: "The name of the local player",
            },
            FunctionDef {
                name: "PlayerCoord",
                description: "Get the coordinates of the player",
                params: &[],
                return_type: "WPOINT",
                return_description: "The coordinates of the player",
            },
            FunctionDef {
                name: "PlayerCoordfloat",
                description: "Get the coordinates of the player as float values",
                params: &[],
                return_type: "FFPOINT",
                return_description: "The coordinates of the player as float values",
            },
            FunctionDef {
                name: "GetHP_",
                description: "Get the current health points of the player",
                params: &[],
                return_type: "number",
                return_description: "The current health points",
            },
            FunctionDef {
                name: "GetHPMax_",
                description: "Get the maximum health points of the player",
                params: &[],
                return_type: "number",
                return_description: "The maximum health points",
            },
            FunctionDef {
                name: "GetPray_",
                description: "Get the current prayer points of the player",
                params: &[],
                return_type: "number",
                return_description: "The current prayer points",
            },
            FunctionDef {
                name: "GetPrayMax_",
                description: "Get the maximum prayer points of the player",
                params: &[],
                return_type: "number",
                return_description: "The maximum prayer points",
            },
            FunctionDef {
                name: "GetAddreline_",
                description: "Get the current adrenaline level of the player",
                params: &[],
                return_type: "number",
                return_description: "The current adrenaline level",
            },
            FunctionDef {
                name: "GetHPrecent",
                description: "Get the current health percentage of the player",
                params: &[],
                return_type: "number",
                return_description: "The current health percentage (0-100)",
            },
            FunctionDef {
                name: "Get_tick",
                description: "Get the current game tick",
                params: &[],
                return_type: "number",
                return_description: "The current game tick",
            },
            FunctionDef {
                name: "ReadPlayerAnim",
                description: "Get the current animation ID of the player",
                params: &[],
                return_type: "number",
                return_description: "The current animation ID",
            },
            FunctionDef {
                name: "Dist_FLP",
                description: "Calculate distance from local player to a point",
                params: &[
                    ParamDef { name: "point", typ: "FFPOINT", description: "The target point", default: None },
                ],
                return_type: "number",
                return_description: "The distance in game units",
            },
        ],
    ),
    (
        "Inventory",
        &[
            FunctionDef {
                name: "InvItemcount_",
                description: "Get the count of a specific item in the inventory",
                params: &[
                    ParamDef { name: "item", typ: "number", description: "The ID of the item to count", default: None },
                ],
                return_type: "number",
                return_description: "The count of the specified item",
            },
            FunctionDef {
                name: "InvStackSize",
                description: "Get the stack size of a specific item in the inventory",
                params: &[
                    ParamDef { name: "item", typ: "number", description: "The ID of the item", default: None },
                ],
                return_type: "number",
                return_description: "The stack size of the specified item",
            },
            FunctionDef {
                name: "InvFull_",
                description: "Check if the inventory is full",
                params: &[],
                return_type: "boolean",
                return_description: "True if the inventory is full, false otherwise",
            },
            FunctionDef {
                name: "Invfreecount_",
                description: "Get the number of free slots in the inventory",
                params: &[],
                return_type: "number",
                return_description: "The number of free slots",
            },
            FunctionDef {
                name: "ClickInv_",
                description: "Click on an item in the inventory",
                params: &[
                    ParamDef { name: "item", typ: "number", description: "The ID of the item to click", default: None },
                    ParamDef { name: "randomelement", typ: "number", description: "Random element (0 default)", default: Some("0") },
                    ParamDef { name: "action", typ: "number", description: "Action (0 left click)", default: Some("0") },
                    ParamDef { name: "xrand", typ: "number", description: "Random X offset", default: Some("0") },
                    ParamDef { name: "yrand", typ: "number", description: "Random Y offset", default: Some("0") },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "Container_Get_all",
                description: "Get all items in a container",
                params: &[
                    ParamDef { name: "containerId", typ: "number", description: "The ID of the container (93 for inventory)", default: Some("93") },
                ],
                return_type: "table",
                return_description: "Table of items in the container",
            },
            FunctionDef {
                name: "Container_Findfrom",
                description: "Find an item in a container",
                params: &[
                    ParamDef { name: "container", typ: "table", description: "The container to search in", default: Some("{}") },
                    ParamDef { name: "itemId", typ: "number", description: "The ID of the item to find", default: None },
                ],
                return_type: "table",
                return_description: "The found item or nil",
            },
        ],
    ),
    (
        "Actions",
        &[
            FunctionDef {
                name: "DoAction_NPC",
                description: "Perform an action on an NPC",
                params: &[
                    ParamDef { name: "action", typ: "number", description: "The action to perform", default: None },
                    ParamDef { name: "offset", typ: "number", description: "The offset for the action", default: None },
                    ParamDef { name: "objects", typ: "table|number", description: "The NPC IDs to target", default: Some("{}") },
                    ParamDef { name: "maxdistance", typ: "number", description: "Maximum distance to search", default: Some("60") },
                    ParamDef { name: "ignore_star", typ: "boolean", description: "Whether to ignore starred NPCs", default: Some("false") },
                    ParamDef { name: "health", typ: "number", description: "Minimum health of the NPC", default: Some("0") },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "DoAction_Object",
                description: "Perform an action on an object",
                params: &[
                    ParamDef { name: "action", typ: "number", description: "The action to perform", default: None },
                    ParamDef { name: "offset", typ: "number", description: "The offset for the action", default: None },
                    ParamDef { name: "obj", typ: "table|number", description: "The object IDs to target", default: Some("{}") },
                    ParamDef { name: "maxdistance", typ: "number", description: "Maximum distance to search", default: Some("60") },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "DoAction_Tile",
                description: "Perform an action on a tile",
                params: &[
                    ParamDef { name: "normal_tile", typ: "WPOINT", description: "The tile coordinates", default: None },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "DoAction_WalkerF",
                description: "Walk to a specific tile using float coordinates",
                params: &[
                    ParamDef { name: "normal_tile", typ: "FFPOINT", description: "The tile coordinates as float values", default: None },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "DoAction_WalkerW",
                description: "Walk to a specific tile using integer coordinates",
                params: &[
                    ParamDef { name: "normal_tile", typ: "WPOINT", description: "The tile coordinates as integer values", default: None },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "DoAction_TileF",
                description: "Click on a tile with float coordinates",
                params: &[
                    ParamDef { name: "tile", typ: "FFPOINT", description: "The tile coordinates", default: None },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "DoAction_NPC__Direct",
                description: "Directly interact with an NPC object",
                params: &[
                    ParamDef { name: "action", typ: "number", description: "The action to perform", default: None },
                    ParamDef { name: "offset", typ: "number", description: "The offset for the action", default: None },
                    ParamDef { name: "npc", typ: "table", description: "The NPC object to interact with", default: Some("{}") },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "DoAction_Object_Direct",
                description: "Directly interact with a game object",
                params: &[
                    ParamDef { name: "action", typ: "number", description: "The action to perform", default: None },
                    ParamDef { name: "offset", typ: "number", description: "The offset for the action", default: None },
                    ParamDef { name: "object", typ: "table", description: "The object to interact with", default: Some("{}") },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "DoAction_Interface",
                description: "Interact with an interface element",
                params: &[
                    ParamDef { name: "action", typ: "number", description: "The action to perform", default: None },
                    ParamDef { name: "param1", typ: "number", description: "Parameter 1", default: Some("0") },
                    ParamDef { name: "param2", typ: "number", description: "Parameter 2", default: Some("0") },
                    ParamDef { name: "interfaceId", typ: "number", description: "The interface ID", default: None },
                    ParamDef { name: "componentId", typ: "number", description: "The component ID", default: None },
                    ParamDef { name: "subComponentId", typ: "number", description: "The sub-component ID", default: Some("-1") },
                    ParamDef { name: "offset", typ: "number", description: "The offset for the action", default: None },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
        ],
    ),
    (
        "Bank",
        &[
            FunctionDef {
                name: "BankOpen2",
                description: "Open the bank",
                params: &[],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "BankClose",
                description: "Close the bank",
                params: &[],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "BankAllItems",
                description: "Deposit all items in the inventory to the bank",
                params: &[],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "BankClickItem",
                description: "Click on an item in the bank",
                params: &[
                    ParamDef { name: "id", typ: "number", description: "The ID of the item to click", default: None },
                    ParamDef { name: "mouse", typ: "number", description: "Mouse button (0 for left, 1 for right)", default: Some("0") },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "BankGetItemStack",
                description: "Get the stack size of an item in the bank",
                params: &[
                    ParamDef { name: "item", typ: "number", description: "The ID of the item", default: None },
                ],
                return_type: "number",
                return_description: "The stack size of the item",
            },
        ],
    ),
    (
        "Combat",
        &[
            FunctionDef {
                name: "DoAction_Ability",
                description: "Use an ability",
                params: &[
                    ParamDef { name: "abilityName", typ: "string", description: "The name of the ability", default: None },
                    ParamDef { name: "param", typ: "number", description: "Additional parameter", default: Some("1") },
                    ParamDef { name: "offset", typ: "number", description: "The offset for the action", default: None },
                    ParamDef { name: "useActionBar", typ: "boolean", description: "Whether to use the action bar", default: Some("false") },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "GetABs_name",
                description: "Get information about an ability by name",
                params: &[
                    ParamDef { name: "abilityName", typ: "string", description: "The name of the ability", default: None },
                ],
                return_type: "table",
                return_description: "Information about the ability",
            },
            FunctionDef {
                name: "DoAction_BDive_Tile",
                description: "Use Bladed Dive ability to a specific tile",
                params: &[
                    ParamDef { name: "tile", typ: "WPOINT", description: "The target tile", default: None },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "CheckAnim",
                description: "Check if player is performing a specific animation",
                params: &[
                    ParamDef { name: "maxTime", typ: "number", description: "Maximum time to check", default: Some("20") },
                    ParamDef { name: "sleepTime", typ: "number", description: "Sleep time between checks", default: Some("4") },
                ],
                return_type: "boolean",
                return_description: "True if animation is active, false otherwise",
            },
        ],
    ),
    (
        "Utility",
        &[
            FunctionDef {
                name: "Sleep_tick",
                description: "Sleep for a specified number of game ticks",
                params: &[
                    ParamDef { name: "count", typ: "number", description: "Number of ticks to sleep", default: Some("1") },
                ],
                return_type: "boolean",
                return_description: "True if successful, false otherwise",
            },
            FunctionDef {
                name: "RandomSleep",
                description: "Sleep for a random amount of time",
                params: &[],
                return_type: "void",
                return_description: "No return value",
            },
            FunctionDef {
                name: "RandomSleep2",
                description: "Sleep for a customizable random amount of time",
                params: &[
                    ParamDef { name: "wait", typ: "number", description: "Base sleep time (100%)", default: Some("600") },
                    ParamDef { name: "sleep", typ: "number", description: "Random sleep addition", default: Some("300") },
                    ParamDef { name: "sleep2", typ: "number", description: "Rare random sleep addition", default: Some("100") },
                ],
                return_type: "void",
                return_description: "No return value",
            },
            FunctionDef {
                name: "Math_RandomNumber",
                description: "Generate a random number up to the specified maximum",
                params: &[
                    ParamDef { name: "numbersize", typ: "number", description: "Maximum value (exclusive)", default: Some("100") },
                ],
                return_type: "number",
                return_description: "A random number between 0 and numbersize-1",
            },
            FunctionDef {
                name: "ReadAllObjectsArray",
                description: "Read all objects in the game world",
                params: &[
                    ParamDef { name: "types", typ: "table", description: "Types of objects to read", default: Some("{-1}") },
                    ParamDef { name: "ids", typ: "table", description: "IDs of objects to read", default: Some("{-1}") },
                    ParamDef { name: "names", typ: "table", description: "Names of objects to read", default: Some("{}") },
                ],
                return_type: "table",
                return_description: "Table of all matching objects",
            },
            FunctionDef {
                name: "WaitUntilMovingEnds",
                description: "Wait until the player stops moving",
                params: &[
                    ParamDef { name: "maxTime", typ: "number", description: "Maximum time to wait", default: Some("20") },
                    ParamDef { name: "sleepTime", typ: "number", description: "Sleep time between checks", default: Some("4") },
                ],
                return_type: "boolean",
                return_description: "True if player stopped moving, false if timed out",
            },
            FunctionDef {
                name: "Math_DistanceF",
                description: "Calculate distance between two points",
                params: &[
                    ParamDef { name: "point1", typ: "FFPOINT", description: "First point", default: None },
                    ParamDef { name: "point2", typ: "FFPOINT", description: "Second point", default: None },
                ],
                return_type: "number",
                return_description: "The distance between the points",
            },
            FunctionDef {
                name: "Math_FreeTiles",
                description: "Find free tiles around a point",
                params: &[
                    ParamDef { name: "points", typ: "table", description: "Points to avoid", default: Some("{}") },
                    ParamDef { name: "radius", typ: "number", description: "Radius to search", default: Some("3") },
                    ParamDef { name: "maxDistance", typ: "number", description: "Maximum distance to search", default: Some("10") },
                    ParamDef { name: "additionalPoints", typ: "table", description: "Additional points to avoid", default: Some("{}") },
                ],
                return_type: "table",
                return_description: "Table of free tiles",
            },
            FunctionDef {
                name: "KeyboardPress31",
                description: "Simulate a keyboard press",
                params: &[
                    ParamDef { name: "key", typ: "number", description: "Key code to press", default: None },
                    ParamDef { name: "holdTime", typ: "number", description: "Time to hold the key (ms)", default: Some("100") },
                    ParamDef { name: "delay", typ: "number", description: "Delay after press (ms)", default: Some("500") },
                ],
                return_type: "void",
                return_description: "No return value",
            },
            FunctionDef {
                name: "DoRandomEvents",
                description: "Handle random game events",
                params: &[],
                return_type: "boolean",
                return_description: "True if an event was handled",
            },
            FunctionDef {
                name: "SystemTime",
                description: "Get the current system time in milliseconds",
                params: &[],
                return_type: "number",
                return_description: "Current system time in milliseconds",
            },
        ],
    ),
    (
        "Advanced",
        &[
            FunctionDef {
                name: "CreateIG_answer",
                description: "Create an interface element for drawing",
                params: &[],
                return_type: "table",
                return_description: "New interface element",
            },
            FunctionDef {
                name: "DrawTextAt",
                description: "Draw text on the screen",
                params: &[
                    ParamDef { name: "element", typ: "table", description: "Interface element to draw", default: None },
                ],
                return_type: "void",
                return_description: "No return value",
            },
            FunctionDef {
                name: "DrawListBox",
                description: "Draw a list box on the screen",
                params: &[
                    ParamDef { name: "element", typ: "table", description: "Interface element to draw", default: None },
                ],
                return_type: "void",
                return_description: "No return value",
            },
            FunctionDef {
                name: "GatherEvents_chat_check",
                description: "Get recent chat messages",
                params: &[],
                return_type: "table",
                return_description: "Table of chat messages",
            },
            FunctionDef {
                name: "VB_FindPSett",
                description: "Find a player setting by ID",
                params: &[
                    ParamDef { name: "settingId", typ: "number", description: "The setting ID to find", default: None },
                ],
                return_type: "table",
                return_description: "The player setting",
            },
            FunctionDef {
                name: "Compare2874Status",
                description: "Compare a specific game status",
                params: &[
                    ParamDef { name: "statusId", typ: "number", description: "The status ID to check", default: None },
                    ParamDef { name: "expectedValue", typ: "boolean", description: "The expected value", default: Some("true") },
                ],
                return_type: "boolean",
                return_description: "True if status matches expected value",
            },
            FunctionDef {
                name: "ScriptRuntimeString",
                description: "Get the script runtime as a formatted string",
                params: &[],
                return_type: "string",
                return_description: "The script runtime as a string",
            },
            FunctionDef {
                name: "Read_LoopyLoop",
                description: "Check if the script should continue running",
                params: &[],
                return_type: "boolean",
                return_description: "True if the script should continue",
            },
            FunctionDef {
                name: "Write_LoopyLoop",
                description: "Set whether the script should continue running",
                params: &[
                    ParamDef { name: "value", typ: "boolean", description: "Whether to continue running", default: Some("true") },
                ],
                return_type: "void",
                return_description: "No return value",
            },
        ],
    ),
];
