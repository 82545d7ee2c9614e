//! Quips shown by the console. Pure content; `{name}` and `{weapon}` are
//! substituted by the caller.

pub const START: [&str; 4] = [
    "So, {name}, your journey begins with a broom and a dream...",
    "{name}, they said you couldn't do it. Prove them right!",
    "Get ready, {name}! Glory, points and plenty of silly deaths await.",
    "{name}, the world awaits its hero. Or at least someone with a broom.",
];

pub const PLAYER_ATTACK: [&str; 7] = [
    "You strike the enemy shouting 'This is Sparta!'",
    "Your attack comes with an epic soundtrack",
    "You remember your coach's advice and hit more accurately",
    "The enemy is distracted by a passing bird, and you seize the moment",
    "You attack with the meme power of 2010",
    "A blow so mighty the enemy's trousers fall down",
    "You hit the enemy while quoting Shakespeare",
];

pub const ENEMY_ATTACK: [&str; 7] = [
    "The enemy attacks, muttering about rent increases",
    "The attack is accompanied by a loud sneeze",
    "The enemy hits you while scrolling social media",
    "The attack is as unexpected as a typo in an important document",
    "The enemy attacks shouting 'For the apartment!'",
    "The blow is delivered with morning grumpiness",
    "The attack smells of yesterday's borscht",
];

pub const VICTORY: [&str; 4] = [
    "The enemy weeps, remembering its failed career as a clown",
    "Victory! Time for a nap",
    "The enemy promises to mention this in its memoirs",
    "You won! Probably...",
];

pub const DEATH: [&str; 4] = [
    "You fall thinking 'and I never finished that coffee...'",
    "The world slowly drifts away. Very slowly.",
    "The key is to die with a smile! You nailed it.",
    "You lost, but you looked stylish doing it",
];

pub const ESCAPE: [&str; 4] = [
    "You escaped by pretending to be a bush!",
    "You run away, leaving a trail of dignity behind",
    "Escape successful! The enemy is looking for someone else now",
    "You got away! For now...",
];

pub const EQUIP: [&str; 4] = [
    "You equipped {weapon}! Now you're almost dangerous.",
    "{weapon} is yours! Hopefully it can do the dishes.",
    "New weapon! It smells... interesting.",
    "You took {weapon}. Looks dubious, but let's try it.",
];

pub const SKIP: [&str; 4] = [
    "You left the weapon behind. Maybe a mistake?",
    "The weapon stays on the ground. It looks offended.",
    "You walk past. You must have better plans.",
    "The weapon lies untouched. Archaeologists will be thrilled.",
];

pub const GAME_OVER: [&str; 6] = [
    "Don't be sad! Even great heroes lose sometimes... often... very often.",
    "At least you looked good in the process!",
    "It was a glorious battle! Well, not that glorious, but it was a battle!",
    "Participation is what counts. And yours is over.",
    "Unlucky in games, lucky in love! Hopefully...",
    "You lost, but think of all the stories you can tell!",
];
