use axum::response::Html;

use super::{layout, Chrome};

pub fn signup_page(chrome: &Chrome) -> Html<String> {
    let body = r#"
<h1>Create your account <span class="te">/ ఖాతా సృష్టించండి</span></h1>
<form method="post" action="/signup">
    <label>Full name <input name="fullname" required></label>
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" required></label>
    <label>Phone <input name="phone" required></label>
    <label>Village / Address <input name="address" required></label>
    <label>Role
        <select name="role">
            <option value="farmer">Farmer</option>
            <option value="expert">Agri expert</option>
        </select>
    </label>
    <button type="submit">Sign up</button>
</form>
<p>Already registered? <a href="/login">Login</a></p>
"#;
    layout(chrome, "Signup", body)
}

pub fn login_page(chrome: &Chrome) -> Html<String> {
    let body = r#"
<h1>Login <span class="te">/ లాగిన్</span></h1>
<form method="post" action="/login">
    <label>Email <input type="email" name="email" required></label>
    <label>Password <input type="password" name="password" required></label>
    <button type="submit">Login</button>
</form>
<p><a href="/forgot-password">Forgot password?</a> &middot; <a href="/signup">Create an account</a></p>
"#;
    layout(chrome, "Login", body)
}

pub fn forgot_password_page(chrome: &Chrome) -> Html<String> {
    let body = r#"
<h1>Forgot password <span class="te">/ పాస్‌వర్డ్ మర్చిపోయారా</span></h1>
<form method="post" action="/forgot-password">
    <label>Registered email <input type="email" name="email" required></label>
    <button type="submit">Send reset instructions</button>
</form>
"#;
    layout(chrome, "Forgot password", body)
}
