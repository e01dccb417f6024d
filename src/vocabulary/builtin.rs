use super::Category;

pub(super) const LISTS: [(Category, &[&str]); 8] = [
    (Category::Pose, POSES),
    (Category::Location, LOCATIONS),
    (Category::Outfit, OUTFITS),
    (Category::Lighting, LIGHTING),
    (Category::PhysiqueDetail, PHYSIQUE_DETAILS),
    (Category::SkinDetail, SKIN_DETAILS),
    (Category::Camera, CAMERAS),
    (Category::ExplicitDescriptor, EXPLICIT_DESCRIPTORS),
];

const POSES: &[&str] = &[
    "gym mirror selfie",
    "squat pose",
    "deadlift",
    "yoga pose",
    "plank position",
    "lunges",
    "bicep curl",
    "running on treadmill",
    "bench press",
    "lat pulldown",
    "leg press",
    "cable crossover",
    "dumbbell rows",
    "shoulder press",
    "burpees",
    "box jumps",
    "kettlebell swings",
    "battle ropes",
    "pull-ups",
    "push-ups",
];

const LOCATIONS: &[&str] = &[
    "gym mirror",
    "home gym",
    "outdoor park",
    "yoga studio",
    "CrossFit box",
    "hotel gym",
    "beach workout",
    "rooftop gym",
    "garage gym",
    "fitness center",
];

const OUTFITS: &[&str] = &[
    "sports bra and leggings",
    "tank top and shorts",
    "yoga pants and crop top",
    "athletic wear",
    "gym outfit",
    "compression gear",
    "running shorts",
    "workout dress",
    "sports bikini",
    "fitness bodysuit",
];

const LIGHTING: &[&str] = &[
    "natural lighting",
    "gym lighting",
    "golden hour",
    "studio lighting",
    "soft window light",
    "dramatic shadows",
    "bright overhead lights",
    "sunset glow",
    "morning light",
    "neon gym lights",
];

const PHYSIQUE_DETAILS: &[&str] = &[
    "detailed abs",
    "toned arms",
    "athletic legs",
    "defined muscles",
    "fit physique",
    "detailed biceps",
    "sculpted shoulders",
    "strong core",
    "muscular thighs",
    "detailed glutes",
];

const SKIN_DETAILS: &[&str] = &[
    "detailed skin texture",
    "natural pores",
    "sweaty skin",
    "glowing skin",
    "detailed skin pores",
    "realistic skin",
    "detailed face",
    "natural makeup",
];

const CAMERAS: &[&str] = &[
    "iPhone candid",
    "iPhone 15 Pro Max photo",
    "amateur photo",
    "selfie camera",
    "professional camera",
    "DSLR quality",
    "phone camera",
    "mirror selfie",
];

const EXPLICIT_DESCRIPTORS: &[&str] = &[
    "visible cleavage",
    "tight outfit",
    "form-fitting clothes",
    "athletic curves",
    "defined body shape",
    "fitness physique",
];
