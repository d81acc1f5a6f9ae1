//! Canned post templates, keyed by tone × platform.
//!
//! Every template carries a `{topic}` placeholder (some carry two). `render` is
//! pure and deterministic: identical inputs always produce identical text.

use crate::generation::platform::Platform;
use crate::generation::tone::Tone;

/// Placeholder substituted with the caller's topic.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

const PROFESSIONAL_TWITTER: &str = r#"Excited to share insights on {topic}. Key takeaway: consistency and quality drive results. What's your experience? 💼"#;

const PROFESSIONAL_LINKEDIN: &str = r#"I wanted to take a moment to discuss {topic}, which has been a key focus for our team recently.

After considerable research and implementation, we've discovered that the most effective approach involves:

• Strategic planning and clear objectives
• Consistent execution and measurement
• Continuous learning and adaptation

The results speak for themselves, and I believe there's value in sharing these insights with the professional community.

What has been your experience with {topic}? I'd love to hear your perspective in the comments."#;

const PROFESSIONAL_INSTAGRAM: &str = r#"Diving deep into {topic} today! ✨

Swipe through to see our journey and the incredible results we've achieved. This has been a game-changer for how we approach our work.

The key? Stay focused, stay consistent, and never stop learning.

What's your take on this? Drop a comment below! 👇"#;

const PROFESSIONAL_FACEBOOK: &str = r#"I wanted to share some thoughts on {topic}. After working on this extensively, I've learned that success comes from careful planning, consistent effort, and a willingness to adapt. Would love to hear your thoughts and experiences!"#;

const CASUAL_TWITTER: &str = r#"Just spent the day working on {topic} and honestly? Mind = blown 🤯 Who else is into this?"#;

const CASUAL_LINKEDIN: &str = r#"So, {topic} has been on my mind lately...

Not gonna lie, when I first started exploring this, I had no idea what I was getting into. But here's what I've learned:

→ It's way more interesting than I thought
→ The community around it is amazing
→ There's always something new to discover

Anyone else working on something similar? Let's connect!"#;

const CASUAL_INSTAGRAM: &str = r#"Real talk about {topic} 💭

Been working on this for a while now and wanted to share the journey with you all. It's been a wild ride - lots of ups, downs, and everything in between.

But that's what makes it exciting, right?

Who else is on this path? Let's chat! 👋"#;

const CASUAL_FACEBOOK: &str = r#"Hey everyone! Been diving into {topic} lately and it's been quite the adventure. Thought I'd share what I've been learning. Anyone else working on something similar? Would love to connect and swap stories!"#;

const ENTHUSIASTIC_TWITTER: &str = r#"OMG! Just made a breakthrough with {topic}! 🚀 This is EXACTLY what I've been working towards! Who's ready to see what's next? 🔥"#;

const ENTHUSIASTIC_LINKEDIN: &str = r#"I am THRILLED to share what we've been working on with {topic}! 🎉

This has been an incredible journey, and I couldn't be more excited about where we're headed!

Here's what makes this so special:

✨ Game-changing innovation
✨ Real-world impact
✨ Endless possibilities

The energy around this project has been absolutely electric, and I can't wait to see where it takes us!

Who else is excited about {topic}? Let's celebrate these wins together! 🚀"#;

const ENTHUSIASTIC_INSTAGRAM: &str = r#"THIS IS IT! 🎊✨🚀

Everything we've been working on with {topic} is finally coming together and I'm beyond excited to share it with you all!

The journey has been INCREDIBLE:
⚡ Amazing discoveries
⚡ Awesome people
⚡ Unforgettable moments

Can't wait to show you what's next! Stay tuned! 🌟

Tag someone who needs to see this! 👇"#;

const ENTHUSIASTIC_FACEBOOK: &str = r#"I'm so excited to share this! We've been working on {topic} and the results are absolutely amazing! 🎉 This is the kind of breakthrough that makes all the hard work worth it. Can't wait to see where this journey takes us next! Who's with me?!"#;

const HUMOROUS_TWITTER: &str = r#"Me: I'll just quickly work on {topic}
*6 hours later*
Me: Wait, it's dark outside?

Worth it though 😅"#;

const HUMOROUS_LINKEDIN: &str = r#"Let's talk about {topic} for a second... 😄

You know that moment when you think "this will take 5 minutes" and suddenly it's 3 days later and you're questioning all your life choices?

Yeah, that's been my week.

But here's the thing - somewhere between the coffee-fueled debugging sessions and the "why isn't this working" moments, something magical happened. We actually figured it out!

Turns out {topic} is like pizza: even when it's bad, it's still pretty good.

Anyone else living this reality? 🍕"#;

const HUMOROUS_INSTAGRAM: &str = r#"POV: You're me trying to explain {topic} at a party 🤓

Everyone else: *slowly backs away*

But seriously though, this stuff is actually hilarious when you think about it. Like, who decided this was a good idea? Oh wait... that was us 😂

Swipe for the chaos → "#;

const HUMOROUS_FACEBOOK: &str = r#"Alright, confession time: I thought {topic} would be easy. I was wrong. SO wrong. 😅 It's been a rollercoaster of "aha!" moments followed by "wait, what?" moments. But hey, at least we're learning, right? Anyone else feel personally attacked by this? 😂"#;

const INSPIRATIONAL_TWITTER: &str = r#"Every expert in {topic} was once a beginner who refused to give up. Your journey starts with a single step. Take it. 💫"#;

const INSPIRATIONAL_LINKEDIN: &str = r#"Today, I want to talk about {topic} and why it matters more than you might think.

When I started this journey, I had doubts. We all do. But here's what I've learned:

🌟 Growth happens outside your comfort zone
🌟 Every challenge is an opportunity to learn
🌟 Your unique perspective adds value
🌟 Progress, not perfection, is the goal

{topic} has taught me that success isn't about being the best immediately. It's about showing up consistently, learning from setbacks, and believing in your vision even when others don't see it yet.

To anyone starting their journey: You have what it takes. Trust the process.

What's one lesson that changed your perspective? Share below - your story might inspire someone else. ⬇️"#;

const INSPIRATIONAL_INSTAGRAM: &str = r#"Your journey with {topic} is uniquely yours ✨

Remember:
🌅 Every sunrise brings new possibilities
💪 Your courage inspires others
🚀 Small steps lead to big transformations
💫 You're capable of more than you know

Don't compare your chapter 1 to someone else's chapter 20. Focus on your growth, celebrate your wins, and keep moving forward.

The world needs what only you can offer.

Save this for when you need a reminder 💙

Who's ready to take the next step? 👇"#;

const INSPIRATIONAL_FACEBOOK: &str = r#"Working on {topic} has reminded me of something important: every expert was once a beginner, and every success story started with someone who decided not to give up. Your path may be different, but your potential is limitless. Keep going, keep learning, keep believing. You've got this! 💪✨"#;

/// Looks up the template for a tone and platform.
pub fn template(tone: Tone, platform: Platform) -> &'static str {
    match (tone, platform) {
        (Tone::Professional, Platform::Twitter) => PROFESSIONAL_TWITTER,
        (Tone::Professional, Platform::LinkedIn) => PROFESSIONAL_LINKEDIN,
        (Tone::Professional, Platform::Instagram) => PROFESSIONAL_INSTAGRAM,
        (Tone::Professional, Platform::Facebook) => PROFESSIONAL_FACEBOOK,
        (Tone::Casual, Platform::Twitter) => CASUAL_TWITTER,
        (Tone::Casual, Platform::LinkedIn) => CASUAL_LINKEDIN,
        (Tone::Casual, Platform::Instagram) => CASUAL_INSTAGRAM,
        (Tone::Casual, Platform::Facebook) => CASUAL_FACEBOOK,
        (Tone::Enthusiastic, Platform::Twitter) => ENTHUSIASTIC_TWITTER,
        (Tone::Enthusiastic, Platform::LinkedIn) => ENTHUSIASTIC_LINKEDIN,
        (Tone::Enthusiastic, Platform::Instagram) => ENTHUSIASTIC_INSTAGRAM,
        (Tone::Enthusiastic, Platform::Facebook) => ENTHUSIASTIC_FACEBOOK,
        (Tone::Humorous, Platform::Twitter) => HUMOROUS_TWITTER,
        (Tone::Humorous, Platform::LinkedIn) => HUMOROUS_LINKEDIN,
        (Tone::Humorous, Platform::Instagram) => HUMOROUS_INSTAGRAM,
        (Tone::Humorous, Platform::Facebook) => HUMOROUS_FACEBOOK,
        (Tone::Inspirational, Platform::Twitter) => INSPIRATIONAL_TWITTER,
        (Tone::Inspirational, Platform::LinkedIn) => INSPIRATIONAL_LINKEDIN,
        (Tone::Inspirational, Platform::Instagram) => INSPIRATIONAL_INSTAGRAM,
        (Tone::Inspirational, Platform::Facebook) => INSPIRATIONAL_FACEBOOK,
    }
}

/// Renders post content for raw wire labels.
///
/// Unknown tone → professional. Unknown platform → the facebook template of the tone.
/// The topic is inserted verbatim; no length enforcement against the platform profile.
pub fn render(topic: &str, platform: &str, tone: &str) -> String {
    let tone = Tone::resolve(tone);
    let platform = Platform::from_label(platform).unwrap_or(Platform::Facebook);
    template(tone, platform).replace(TOPIC_PLACEHOLDER, topic)
}
