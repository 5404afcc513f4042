//! Built-in question bank and profile table.

/// Static profile row, converted into an [`AgentProfile`](crate::AgentProfile) on load.
pub(crate) struct ProfileSeed {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) icon: Option<&'static str>,
    pub(crate) strengths: [&'static str; 3],
    pub(crate) weaknesses: [&'static str; 3],
}

/// Static question row: prompt, dimension key, and two `(letter, text, image)` options.
pub(crate) struct QuestionSeed {
    pub(crate) text: &'static str,
    pub(crate) dimension: &'static str,
    pub(crate) options: [(char, Option<&'static str>, Option<&'static str>); 2],
}

pub(crate) const QUESTIONS: [QuestionSeed; 5] = [
    QuestionSeed {
        text: "Do you work to live or live to work?",
        dimension: "WL",
        options: [('L', Some("Work to live"), None), ('W', Some("Live to work"), None)],
    },
    QuestionSeed {
        text: "My ideal day:",
        dimension: "TI",
        options: [('I', None, Some("/images/agents/2A.png")), ('T', None, Some("/images/agents/2B.png"))],
    },
    QuestionSeed {
        text: "What does your inbox look like?",
        dimension: "SU",
        options: [('S', None, Some("/images/agents/3a.png")), ('U', None, Some("/images/agents/3b.png"))],
    },
    QuestionSeed {
        text: "What templates are you interested in?",
        dimension: "AC",
        options: [('A', None, Some("/images/agents/4a.png")), ('C', None, Some("/images/agents/4b.png"))],
    },
    QuestionSeed {
        text: "Do you prefer to take the lead and prioritize outcomes or cooperate and maintain harmony?",
        dimension: "YD",
        options: [('D', Some("Prioritize outcomes"), None), ('Y', Some("Prioritize harmony"), None)],
    },
];

pub(crate) const PROFILES: [ProfileSeed; 32] = [
    ProfileSeed {
        code: "WTUAD",
        name: "Lightbulb",
        icon: Some("lightbulb.png"),
        strengths: [
            "The ultimate idea generator - innovation is their middle name",
            "Thrives in chaotic, unstructured environments where others get lost",
            "Can see the big picture and connect abstract concepts like magic",
        ],
        weaknesses: [
            "Hundreds of tabs open and proud of it",
            "Has strong opinions about everything but forgets what they argued yesterday",
            "Can't resist adding 'just one more feature' that completely changes everything",
        ],
    },
    ProfileSeed {
        code: "WTUAY",
        name: "Scribble",
        icon: Some("scribble.png"),
        strengths: [
            "Creative chaos master - turns messy brainstorms into breakthrough ideas",
            "Thrives in unstructured environments where others get lost",
            "Amazing at building team consensus around innovative concepts",
        ],
        weaknesses: [
            "Starts more projects than humanly possible to finish",
            "Gets excited about every new idea and forgets the old ones",
            "Avoids making tough decisions that might hurt feelings",
        ],
    },
    ProfileSeed {
        code: "WTUCD",
        name: "Bell",
        icon: None,
        strengths: [
            "Always knows what's trending before it's cool",
            "Excellent at reading the room and adapting to team dynamics",
            "Can take abstract ideas and make them practical",
        ],
        weaknesses: [
            "Gets distracted by shiny new things",
            "Sometimes sacrifices depth for breadth",
            "FOMO is their middle name",
        ],
    },
    ProfileSeed {
        code: "WTUCY",
        name: "Clippy",
        icon: None,
        strengths: [
            "Always ready to help, even when you don't ask",
            "Great at taking messy situations and finding practical solutions",
            "Builds harmony while still getting concrete results",
        ],
        weaknesses: [
            "Can be a little too helpful sometimes",
            "Sometimes avoids taking charge when leadership is needed",
            "Has strong opinions about font choices",
        ],
    },
    ProfileSeed {
        code: "WTSAD",
        name: "Single Arrow",
        icon: None,
        strengths: [
            "Finishes three things while others are still arguing about what to have for lunch",
            "Can spot the actual problem in a room full of people discussing symptoms",
            "Turns your random 3 AM idea into reality before your morning coffee gets cold",
        ],
        weaknesses: [
            "Gets a visible eye twitch when plans change or meetings run over",
            "Has an allergic reaction to team bonding activities and trust falls",
            "Will accidentally bulldoze through feelings like they're made of tissue paper",
        ],
    },
    ProfileSeed {
        code: "WTSAY",
        name: "Repeat Cycle",
        icon: None,
        strengths: [
            "Masters of creating efficient, repeatable processes",
            "Great at building team alignment around structured approaches",
            "Excellent at balancing big-picture thinking with practical execution",
        ],
        weaknesses: [
            "Gets stressed when plans change or structure breaks down",
            "Can be overly cautious about taking decisive action",
            "Sometimes gets stuck perfecting the process instead of shipping",
        ],
    },
    ProfileSeed {
        code: "WTSCY",
        name: "Notetaker",
        icon: Some("notetaker.png"),
        strengths: [
            "Never misses a detail - the human version of meeting minutes",
            "Creates structured systems that help teams stay organized",
            "Builds consensus by making sure everyone's voice is documented",
        ],
        weaknesses: [
            "Takes notes on their note-taking process",
            "Sometimes gets stuck documenting instead of doing",
            "Avoids tough decisions that might disrupt team harmony",
        ],
    },
    ProfileSeed {
        code: "WTSCD",
        name: "Gear",
        icon: None,
        strengths: [
            "Incredible at building robust systems that actually work",
            "Great at seeing both the abstract design and concrete implementation",
            "Takes charge of complex projects and drives them to completion",
        ],
        weaknesses: [
            "Gets frustrated when team doesn't follow established processes",
            "Can be inflexible when 'good enough' would be better than perfect",
            "Sometimes bulldozes through team input in favor of efficiency",
        ],
    },
    ProfileSeed {
        code: "WISCD",
        name: "Time Schedule",
        icon: None,
        strengths: [
            "Always prepared, the type of person who packs snacks for a 20-minute drive",
            "Can turn your wildest dreams into a perfectly color-coded spreadsheet",
            "Has backup plans for their backup plans",
        ],
        weaknesses: [
            "Panics when someone shows up 3 minutes late to a meeting",
            "Gets lost in the details and misses that the building is on fire",
            "Will create a 12-step plan for making a sandwich",
        ],
    },
    ProfileSeed {
        code: "WISCY",
        name: "Brackets",
        icon: None,
        strengths: [
            "The human equivalent of a Swiss Army knife - has a tool for everything",
            "Can get everyone on the same page even when they're reading different books",
            "Makes boring processes actually fun somehow",
        ],
        weaknesses: [
            "Breaks down when there's no instruction manual",
            "Gets the group chat anxiety when people start arguing",
            "Would rather eat pineapple pizza than make someone upset",
        ],
    },
    ProfileSeed {
        code: "WISAD",
        name: "Formula",
        icon: None,
        strengths: [
            "Can solve anything with the right equation and enough coffee",
            "Turns abstract chaos into step-by-step instructions",
            "Gets stuff done while others are still arguing about the font",
        ],
        weaknesses: [
            "Dies a little inside when people don't follow the clearly labeled steps",
            "Has zero patience for 'but what if we tried this random thing instead?'",
            "Sometimes forgets that humans aren't spreadsheet cells",
        ],
    },
    ProfileSeed {
        code: "WISAY",
        name: "Root",
        icon: None,
        strengths: [
            "Deep thinker who creates solid foundations for complex projects",
            "Great at building structured approaches to abstract problems",
            "Excellent at consensus-building around thoughtful solutions",
        ],
        weaknesses: [
            "Can overthink decisions and delay action",
            "Gets paralyzed when structure breaks down or plans change",
            "Sometimes gets stuck in analysis mode instead of executing",
        ],
    },
    ProfileSeed {
        code: "WIUAD",
        name: "Infinity Glasses",
        icon: None,
        strengths: [
            "Thrives in chaotic environments where others get overwhelmed",
            "Amazing at connecting abstract concepts across different domains",
            "Natural leader who can rally people around big, ambitious visions",
        ],
        weaknesses: [
            "Can get lost in theoretical possibilities without concrete action",
            "Gets frustrated with detailed implementation and practical constraints",
            "Sometimes bulldozes through team input when excited about an idea",
        ],
    },
    ProfileSeed {
        code: "WIUAY",
        name: "Math",
        icon: None,
        strengths: [
            "Can see the forest, the trees, and somehow also the squirrels",
            "Can connect your childhood trauma to your Netflix algorithm",
            "Can make anyone understand anything using the right analogy",
        ],
        weaknesses: [
            "Falls into rabbit holes and emerges three hours later having learned about medieval farming",
            "Would rather debate the theory than actually pick something and go with it",
            "Would rather build the perfect system than use the imperfect one that exists",
        ],
    },
    ProfileSeed {
        code: "WIUCD",
        name: "Research",
        icon: None,
        strengths: [
            "Knows the answer to everything... eventually",
            "Can find connections between the most random topics",
            "Makes order out of chaos when everyone else is lost",
        ],
        weaknesses: [
            "Goes down rabbit holes and forgets what the original question was",
            "Gets cranky when people want answers faster than Google can provide them",
            "Has 47 browser tabs open and somehow that's 'organized'",
        ],
    },
    ProfileSeed {
        code: "WIUCY",
        name: "Book Wiki",
        icon: Some("book-wiki.png"),
        strengths: [
            "Walking encyclopedia who somehow makes learning fun",
            "Amazing at connecting random facts into breakthrough insights",
            "Builds consensus by helping everyone understand the 'why'",
        ],
        weaknesses: [
            "Falls down Wikipedia rabbit holes instead of making decisions",
            "Can be indecisive when the team needs quick action",
            "Gets overwhelmed when there's no clear research path",
        ],
    },
    ProfileSeed {
        code: "LIUAD",
        name: "Spiky",
        icon: None,
        strengths: [
            "Brings fresh energy to stale projects and processes",
            "Amazing at working independently in chaotic, unstructured environments",
            "Great at taking big abstract visions and running with them",
        ],
        weaknesses: [
            "Can be impatient with team coordination and consensus-building",
            "Sometimes bulldozes through without considering practical constraints",
            "Gets frustrated when forced into structured processes",
        ],
    },
    ProfileSeed {
        code: "LIUAY",
        name: "Single Loop",
        icon: None,
        strengths: [
            "Excellent at working independently while building team consensus",
            "Great at finding creative solutions in ambiguous situations",
            "Brings calm, thoughtful energy to chaotic projects",
        ],
        weaknesses: [
            "Can get stuck in endless exploration and refinement cycles",
            "Sometimes avoids making tough decisions that might upset people",
            "Gets overwhelmed when forced into rigid timelines or processes",
        ],
    },
    ProfileSeed {
        code: "LIUCD",
        name: "Cactus",
        icon: Some("cactus.png"),
        strengths: [
            "Intimidating but secretly soft",
            "Can make any group stop overthinking by asking 'but what are we actually going to do?'",
            "Has mastered the art of being helpful without enabling helplessness",
        ],
        weaknesses: [
            "Has a bad habit of laughing at the wrong moments",
            "Will be a little too honest in your perf review",
            "Has a habit of disappearing onto random side quests at the worst moments",
        ],
    },
    ProfileSeed {
        code: "LIUCY",
        name: "Saucy",
        icon: Some("saucy.png"),
        strengths: [
            "Adds flavor to boring projects and spices up team dynamics",
            "Great at finding creative solutions in messy situations",
            "Perfect balance of independence and collaborative spirit",
        ],
        weaknesses: [
            "Can be a little too spicy when projects get bland",
            "Would rather wing it than follow a recipe, even when the recipe actually works",
            "Gets frustrated when forced into rigid, tasteless processes",
        ],
    },
    ProfileSeed {
        code: "LTUAD",
        name: "Heart",
        icon: None,
        strengths: [
            "Shows up to your crisis with homemade soup and a vision board",
            "Can rally people around a cause they just made up five minutes ago",
            "Has mastered the art of meaningful eye contact without being creepy",
        ],
        weaknesses: [
            "Cries easily",
            "Treats every coincidence like it's a message meant specifically for them",
            "Sometimes mistakes intensity for intimacy and scares people away",
        ],
    },
    ProfileSeed {
        code: "LTUAY",
        name: "Cloud Flower",
        icon: None,
        strengths: [
            "Can defuse any argument by asking if anyone wants herbal tea",
            "Has perfected the art of saying 'that's interesting' in a way that makes people feel heard",
            "Can make any harsh fluorescent lighting feel softer just by being there",
        ],
        weaknesses: [
            "Won't be able to write down anything critical on your perf review. Except maybe \"Works too hard!!\"",
            "Takes personal responsibility for every awkward pause in group conversations",
            "Can't give directions without including emotional landmarks like 'turn left at where I had my first heartbreak'",
        ],
    },
    ProfileSeed {
        code: "LTUCD",
        name: "Command",
        icon: None,
        strengths: [
            "Excellent at taking charge of chaotic team situations",
            "Great at turning abstract visions into concrete action plans",
            "Can rally teams around practical solutions under pressure",
        ],
        weaknesses: [
            "Can be impatient with team members who need more structure",
            "Sometimes bulldozes through without considering all perspectives",
            "Gets frustrated when projects become too abstract or theoretical",
        ],
    },
    ProfileSeed {
        code: "LTUCY",
        name: "Banana",
        icon: None,
        strengths: [
            "Can turn any struggle into quality comedic content and unhinged slack emojis",
            "Always knows the perfect question to ask to get people talking",
            "Can sense when someone needs a hug and somehow makes it not weird",
        ],
        weaknesses: [
            "Sometimes takes a joke too far and overthinks it for weeks",
            "Takes it as a personal failure when group chemistry just isn't working",
            "Has never won an argument because they always see everyone's point",
        ],
    },
    ProfileSeed {
        code: "LTSAD",
        name: "Book",
        icon: Some("book.png"),
        strengths: [
            "Creates well-structured knowledge systems that teams actually use",
            "Great at taking abstract concepts and organizing them into actionable plans",
            "Natural leader who guides teams through complex information",
        ],
        weaknesses: [
            "Can get frustrated when team doesn't follow their organized approach",
            "Sometimes prioritizes getting it right over getting it done",
            "Gets impatient when discussions become too theoretical",
        ],
    },
    ProfileSeed {
        code: "LTSAY",
        name: "Music",
        icon: Some("music.png"),
        strengths: [
            "Perfect at orchestrating team harmony around structured approaches",
            "Great at finding the rhythm between big-picture vision and execution",
            "Excellent at creating melodious collaboration between different personalities",
        ],
        weaknesses: [
            "Can get stuck trying to make everyone sing in perfect harmony",
            "Sometimes avoids discordant decisions that might upset the ensemble",
            "Gets overwhelmed when the tempo changes or the score gets messy",
        ],
    },
    ProfileSeed {
        code: "LTSCD",
        name: "Phone",
        icon: None,
        strengths: [
            "Amazing at coordinating complex team projects with clear structure",
            "Great at turning abstract visions into concrete, actionable plans",
            "Excellent at driving results while maintaining team collaboration",
        ],
        weaknesses: [
            "Can get overwhelmed when managing too many team communications",
            "Sometimes bulldozes through individual concerns for team efficiency",
            "Gets frustrated when projects become too abstract or open-ended",
        ],
    },
    ProfileSeed {
        code: "LTSCY",
        name: "Double Copy",
        icon: None,
        strengths: [
            "Perfect balance of structured planning and team collaboration",
            "Great at creating backup plans and ensuring everyone's prepared",
            "Excellent at building consensus around practical, concrete solutions",
        ],
        weaknesses: [
            "Can get paralyzed trying to plan for every possible scenario",
            "Sometimes avoids making decisions that might upset team harmony",
            "Gets anxious when processes are unclear or timelines are ambiguous",
        ],
    },
    ProfileSeed {
        code: "LISAD",
        name: "Spiral Notebook/Greek God",
        icon: Some("greek-god.png"),
        strengths: [
            "Works best alone and somehow makes it look effortless",
            "Can turn impossible dreams into actual to-do lists",
            "Has main character energy and the skills to back it up",
        ],
        weaknesses: [
            "Group projects make them break out in hives",
            "Gets so caught up in the big picture they forget to eat lunch",
            "Would rather do everything themselves than explain it twice",
        ],
    },
    ProfileSeed {
        code: "LISAY",
        name: "Umbrella",
        icon: None,
        strengths: [
            "Excellent at working independently while building team consensus",
            "Great at creating structured approaches to abstract, complex problems",
            "Perfect balance of thoughtful planning and collaborative execution",
        ],
        weaknesses: [
            "Can get stuck in analysis mode when quick decisions are needed",
            "Sometimes avoids taking strong positions to maintain harmony",
            "Gets overwhelmed when structure breaks down or processes become unclear",
        ],
    },
    ProfileSeed {
        code: "LISCD",
        name: "Coffee",
        icon: None,
        strengths: [
            "Runs on pure energy and somehow makes 6 AM meetings bearable",
            "Can power through any task with enough caffeine and determination",
            "The human equivalent of a motivational poster, but actually useful",
        ],
        weaknesses: [
            "Gets the jitters when too many people want to 'touch base'",
            "Crashes hard after giving everyone else their daily dose of enthusiasm",
            "Needs concrete goals or starts bouncing off the walls",
        ],
    },
    ProfileSeed {
        code: "LISCY",
        name: "Apple",
        icon: None,
        strengths: [
            "The one who always has a tide pen on them",
            "The human equivalent of a really good multivitamin - quietly essential",
            "Great at gentle parenting their friends through their bad life decisions",
        ],
        weaknesses: [
            "Savior complex",
            "Sometimes forgets that not everyone wants to optimize their life",
            "Won't stop cleaning up other people's homes",
        ],
    },
];
