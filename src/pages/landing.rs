use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::signup_form::SignupForm;
use crate::reveal::Reveal;
use crate::signup::hook::use_signup;
use crate::Route;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🎯", "Competitive VR Sports", "Real-time multiplayer competitions across a growing lineup of VR sports disciplines."),
    ("📊", "Global Leaderboards", "Track your progress, climb the ranks, and see how you stack up against players worldwide."),
    ("🏋️", "Train & Improve", "Practice modes, skill challenges, and analytics to sharpen your game before competition day."),
    ("🤝", "Community First", "Join teams, form rivalries, and connect with a global community of VR athletes."),
];

const STEPS: &[(&str, &str)] = &[
    ("Sign Up", "Create your athlete profile and pick your sports."),
    ("Train", "Practice in solo or multiplayer training sessions."),
    ("Compete", "Enter tournaments and climb the global leaderboard."),
];

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Fade sections in as they scroll into view.
    #[prop_or(true)]
    pub animated: bool,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let signup = use_signup();
    let animated = props.animated;

    html! {
        <div class="landing">
            <section class="hero">
                <div class="hero-badge">{"🏅 Early Access"}</div>
                <h1 class="hero-title">
                    {"Step Into the Arena."}<br />
                    <span class="gradient-text">{"Compete in VR."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"The world's first VR sports competition platform. Train, compete, and climb the global leaderboard, all from your living room."}
                </p>

                <SignupForm
                    state={signup.state.clone()}
                    on_input={signup.on_input.clone()}
                    on_submit={signup.on_submit.clone()}
                />

                <div class="hero-stats">
                    <div class="stat">
                        <span class="stat-number">{signup.state.signup_count}</span>
                        <span class="stat-label">{"Signed Up"}</span>
                    </div>
                    <div class="stat-divider" />
                    <div class="stat">
                        <span class="stat-number">{"2026"}</span>
                        <span class="stat-label">{"Launch Year"}</span>
                    </div>
                    <div class="stat-divider" />
                    <div class="stat">
                        <span class="stat-number">{"∞"}</span>
                        <span class="stat-label">{"Possibilities"}</span>
                    </div>
                </div>
            </section>

            <section class="features">
                <Reveal enabled={animated}>
                    <h2 class="section-title">{"Why VROlympics?"}</h2>
                </Reveal>
                <div class="features-grid">
                    {
                        FEATURES.iter().map(|(icon, title, body)| html! {
                            <Reveal enabled={animated} class="feature-card">
                                <div class="feature-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="how-it-works">
                <Reveal enabled={animated}>
                    <h2 class="section-title">{"How It Works"}</h2>
                </Reveal>
                <div class="steps">
                    {
                        STEPS.iter().enumerate().map(|(i, (title, body))| html! {
                            <Reveal enabled={animated} class="step">
                                <div class="step-number">{i + 1}</div>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <footer class="footer">
                <p class="footer-text">{"© 2026 VROlympics. Built for the next generation of athletes."}</p>
                {
                    if animated {
                        html! { <Link<Route> to={Route::Classic} classes="footer-link">{"Reduced motion"}</Link<Route>> }
                    } else {
                        html! { <Link<Route> to={Route::Home} classes="footer-link">{"Animated version"}</Link<Route>> }
                    }
                }
            </footer>

            <style>
                {r#"
                .landing {
                    min-height: 100vh;
                    background: #0b0b14;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    overflow-x: hidden;
                }

                .hero {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    padding: 8rem 2rem 5rem;
                    background: radial-gradient(circle at top, rgba(126, 87, 255, 0.25), transparent 60%);
                }

                .hero-badge {
                    padding: 0.4rem 1rem;
                    border-radius: 999px;
                    border: 1px solid rgba(126, 87, 255, 0.4);
                    background: rgba(126, 87, 255, 0.1);
                    font-size: 0.9rem;
                    margin-bottom: 2rem;
                }

                .hero-title {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }

                .gradient-text {
                    background: linear-gradient(45deg, #7e57ff, #00d4ff);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    max-width: 600px;
                    color: rgba(255, 255, 255, 0.75);
                    font-size: 1.15rem;
                    margin-bottom: 2.5rem;
                }

                .signup-form {
                    display: flex;
                    gap: 0.75rem;
                    width: 100%;
                    max-width: 480px;
                }

                .signup-input {
                    flex: 1;
                    padding: 0.9rem 1.2rem;
                    border-radius: 12px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(255, 255, 255, 0.05);
                    color: #fff;
                    font-size: 1rem;
                }

                .signup-btn {
                    padding: 0.9rem 1.5rem;
                    border: none;
                    border-radius: 12px;
                    background: linear-gradient(45deg, #7e57ff, #00d4ff);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }

                .signup-btn:hover {
                    transform: translateY(-2px);
                }

                .signup-btn.confirmed {
                    background: #22c55e;
                }

                .signup-confirm {
                    margin-top: 1rem;
                    color: #22c55e;
                }

                .signup-warning {
                    margin-top: 1rem;
                    color: #fbbf24;
                    font-size: 0.9rem;
                    max-width: 480px;
                }

                .hero-stats {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                    margin-top: 3rem;
                }

                .stat {
                    display: flex;
                    flex-direction: column;
                }

                .stat-number {
                    font-size: 2rem;
                    font-weight: 700;
                }

                .stat-label {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.85rem;
                }

                .stat-divider {
                    width: 1px;
                    height: 40px;
                    background: rgba(255, 255, 255, 0.15);
                }

                .features, .how-it-works {
                    padding: 5rem 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .section-title {
                    text-align: center;
                    font-size: 2.2rem;
                    margin-bottom: 3rem;
                }

                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .feature-card {
                    padding: 2rem;
                    border-radius: 16px;
                    background: rgba(30, 30, 45, 0.7);
                    border: 1px solid rgba(126, 87, 255, 0.15);
                }

                .feature-icon {
                    font-size: 2rem;
                    margin-bottom: 1rem;
                }

                .steps {
                    display: flex;
                    gap: 2rem;
                    justify-content: center;
                }

                .step {
                    flex: 1;
                    text-align: center;
                }

                .step-number {
                    width: 48px;
                    height: 48px;
                    margin: 0 auto 1rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: linear-gradient(45deg, #7e57ff, #00d4ff);
                    font-weight: 700;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .reveal.visible {
                    opacity: 1;
                    transform: translateY(0);
                }

                .footer {
                    padding: 3rem 2rem;
                    text-align: center;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    color: rgba(255, 255, 255, 0.5);
                }

                .footer-link {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.85rem;
                }

                @media (max-width: 768px) {
                    .signup-form {
                        flex-direction: column;
                    }

                    .steps {
                        flex-direction: column;
                    }

                    .hero-stats {
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
